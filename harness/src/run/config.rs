use anyhow::Context;
use rmscore::fixture::{builtin_table, Fixture};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fixture catalog for one run: the built-in vectors or a YAML file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunPlan {
    pub fixtures: Vec<Fixture>,
}

impl RunPlan {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading fixture catalog {}", path_ref.display()))?;
        let plan: RunPlan = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing fixture catalog {}", path_ref.display()))?;
        Ok(plan)
    }

    pub fn builtin() -> Self {
        Self {
            fixtures: builtin_table(),
        }
    }
}

use crate::fixture::case::{Fixture, SignalSpec};
use crate::math::stats::RmsMath;
use crate::signal::{PulseTrain, Sinusoid};
use std::f64::consts::FRAC_1_SQRT_2;

/// Built-in test vectors, in run order.
pub fn builtin_table() -> Vec<Fixture> {
    vec![
        Fixture::new(1.0, SignalSpec::Literal(vec![1.0])),
        Fixture::new(0.0, SignalSpec::Literal(vec![0.0; 4])),
        Fixture::new(2.0, SignalSpec::Literal(vec![2.0; 6])),
        Fixture::new(FRAC_1_SQRT_2, SignalSpec::Sinusoid(Sinusoid::default())),
        Fixture::new(
            RmsMath::sinusoid_rms(4.5, 2.67),
            SignalSpec::Sinusoid(Sinusoid {
                amplitude: 4.5,
                phase: 180.0_f64.to_radians(),
                dc: 2.67,
                ..Default::default()
            }),
        ),
        Fixture::new(
            FRAC_1_SQRT_2,
            SignalSpec::Sinusoid(Sinusoid {
                cycles: 0.5,
                ..Default::default()
            }),
        ),
        Fixture::new(
            RmsMath::pulse_rms(3.5, 0.2),
            SignalSpec::PulseTrain(PulseTrain {
                amplitude: 3.5,
                duty_cycle: 0.2,
                ..Default::default()
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_seven_vectors() {
        assert_eq!(builtin_table().len(), 7);
    }

    #[test]
    fn literal_vectors_render_expected_text() {
        let table = builtin_table();
        assert_eq!(table[0].expected_text(), "1.0");
        assert_eq!(table[1].expected_text(), "0.0");
        assert_eq!(table[2].expected_text(), "2.0");
        assert_eq!(table[3].expected_text(), "0.7071067811865476");
    }

    #[test]
    fn half_cycle_shares_the_full_cycle_expectation() {
        let table = builtin_table();
        assert_eq!(table[3].expected, table[5].expected);
    }

    #[test]
    fn every_vector_agrees_with_numeric_rms() {
        for (index, fixture) in builtin_table().iter().enumerate() {
            let samples = fixture.signal.materialize().unwrap();
            let measured = RmsMath::rms(&samples);
            assert!(
                (measured - fixture.expected).abs() < 1e-9,
                "vector {}: expected {} measured {}",
                index,
                fixture.expected,
                measured
            );
        }
    }
}

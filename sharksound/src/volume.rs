//! Volume conversions.

/// The global volume handed to sounds is the requested volume divided by
/// this value, which leaves headroom for overlapping playbacks.
pub const GLOBAL_VOLUME_DIVISOR: f32 = 2.0;

/// Anything at or below this level is inaudible.
pub const SILENCE_DECIBELS: f32 = -60.0;

/// Converts a linear amplitude to decibels. Amplitudes of zero and below map
/// to [`SILENCE_DECIBELS`].
pub fn amplitude_to_decibels(amplitude: f32) -> f32 {
    if amplitude <= 0.0 {
        return SILENCE_DECIBELS;
    }

    (20.0 * amplitude.log10()).max(SILENCE_DECIBELS)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{amplitude_to_decibels, SILENCE_DECIBELS};

    #[test]
    fn test_unity_is_zero_decibels() {
        assert_relative_eq!(amplitude_to_decibels(1.0), 0.0);
    }

    #[test]
    fn test_half_amplitude() {
        assert_relative_eq!(amplitude_to_decibels(0.5), -6.0206, epsilon = 1e-3);
    }

    #[test]
    fn test_silence() {
        assert_eq!(amplitude_to_decibels(0.0), SILENCE_DECIBELS);
        assert_eq!(amplitude_to_decibels(-1.0), SILENCE_DECIBELS);
        assert_eq!(amplitude_to_decibels(1e-6), SILENCE_DECIBELS);
    }

    #[test]
    fn test_amplification_is_not_clamped() {
        assert_relative_eq!(amplitude_to_decibels(10.0), 20.0);
    }
}

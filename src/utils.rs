pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() || v < 0.0 {
        0.0
    } else if v > 1.0 {
        1.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp01_handles_nan_and_bounds() {
        assert_eq!(clamp01(f32::NAN), 0.0);
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
        assert!((clamp01(0.42) - 0.42).abs() < 1e-6);
    }

    #[test]
    fn normalize_label_trims_and_lowercases() {
        assert_eq!(normalize_label("  Happy "), "happy");
    }
}

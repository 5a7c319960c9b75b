use super::*;

#[test]
fn default_spring_is_underdamped_and_converges() {
    let s = Spring::default();
    s.validate().unwrap();
    assert!(s.damping_ratio() < 1.0);
    assert_eq!(s.sample(-75.0, 0.0, 0.0, 0.0), -75.0);
    let late = s.sample(-75.0, 0.0, 0.0, 5.0);
    assert!(late.abs() < 0.01, "late={late}");
    assert!(s.is_settled(-75.0, 0.0, 0.0, 5.0));
    assert!(!s.is_settled(-75.0, 0.0, 0.0, 0.1));
}

#[test]
fn underdamped_spring_overshoots() {
    let s = Spring {
        stiffness: 300.0,
        damping: 10.0,
        mass: 1.0,
    };
    let peak = (1..200)
        .map(|i| s.sample(0.0, 1.0, 0.0, f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn critical_and_overdamped_do_not_overshoot() {
    for damping in [2.0 * 60f64.sqrt(), 40.0] {
        let s = Spring {
            stiffness: 60.0,
            damping,
            mass: 1.0,
        };
        for i in 0..400 {
            let v = s.sample(0.0, 1.0, 0.0, f64::from(i) / 100.0);
            assert!(v <= 1.0 + 1e-9, "damping={damping} v={v}");
        }
        assert!((s.sample(0.0, 1.0, 0.0, 10.0) - 1.0).abs() < 1e-3);
    }
}

#[test]
fn validate_rejects_zero_stiffness() {
    let s = Spring {
        stiffness: 0.0,
        ..Spring::default()
    };
    assert!(s.validate().is_err());
}

use gencsf::angmom::spin::HalfSpin;
use gencsf::drivers::csf_generation::{CsfGenerationDriver, CsfGenerationParams};
use gencsf::drivers::GenCsfDriver;
use gencsf::genealogy::path::enumerate_spin_paths;

#[test]
fn test_four_electron_singlets() {
    let params = CsfGenerationParams::builder()
        .n_electrons(4)
        .total_spin(HalfSpin::zero())
        .projection(HalfSpin::zero())
        .build()
        .unwrap();
    let mut driver = CsfGenerationDriver::builder()
        .parameters(&params)
        .build()
        .unwrap();
    driver.run().unwrap();
    let result = driver.result().unwrap();
    assert_eq!(result.n_csfs(), 2);
    assert_eq!(result.csfs[0].path.to_string(), "[0, 1/2, 1, 1/2, 0]");
    assert_eq!(result.csfs[0].expression.n_terms(), 6);
    assert_eq!(result.csfs[1].path.to_string(), "[0, 1/2, 0, 1/2, 0]");
    assert_eq!(result.csfs[1].expression.n_terms(), 4);
}

#[test]
fn test_five_electron_doublets() {
    let params = CsfGenerationParams::builder()
        .n_electrons(5)
        .total_spin(HalfSpin::one_half())
        .projection(HalfSpin::one_half())
        .build()
        .unwrap();
    let mut driver = CsfGenerationDriver::builder()
        .parameters(&params)
        .build()
        .unwrap();
    driver.run().unwrap();
    let result = driver.result().unwrap();
    // d(5, 1/2) = C(5, 3) - C(5, 4) = 5.
    assert_eq!(result.n_csfs(), 5);
    for csf in &result.csfs {
        assert_eq!(csf.path.final_spin(), HalfSpin::one_half());
        assert!(!csf.expression.is_zero());
    }
}

#[test]
fn test_single_electron() {
    let params = CsfGenerationParams::builder()
        .n_electrons(1)
        .total_spin(HalfSpin::one_half())
        .projection(HalfSpin::from_twice(-1))
        .build()
        .unwrap();
    let mut driver = CsfGenerationDriver::builder()
        .parameters(&params)
        .build()
        .unwrap();
    driver.run().unwrap();
    let result = driver.result().unwrap();
    assert_eq!(result.n_csfs(), 1);
    assert_eq!(result.csfs[0].expression.to_string(), "b(1)");
}

#[test]
fn test_vacuum() {
    let params = CsfGenerationParams::builder()
        .n_electrons(0)
        .total_spin(HalfSpin::zero())
        .projection(HalfSpin::zero())
        .build()
        .unwrap();
    let mut driver = CsfGenerationDriver::builder()
        .parameters(&params)
        .build()
        .unwrap();
    driver.run().unwrap();
    let result = driver.result().unwrap();
    assert_eq!(result.n_csfs(), 1);
    assert_eq!(result.csfs[0].expression.n_terms(), 1);
}

#[test]
fn test_parity_mismatch_rejected() {
    let params = CsfGenerationParams::builder()
        .n_electrons(5)
        .total_spin(HalfSpin::from_twice(2))
        .projection(HalfSpin::zero())
        .build()
        .unwrap();
    let mut driver = CsfGenerationDriver::builder()
        .parameters(&params)
        .build()
        .unwrap();
    let err = driver.run().unwrap_err();
    assert!(err.to_string().contains("parities"));
}

#[test]
fn test_path_enumeration_api() {
    let paths = enumerate_spin_paths(6, HalfSpin::zero());
    assert_eq!(paths.len(), 5);
    assert_eq!(paths[0].to_string(), "[0, 1/2, 1, 3/2, 1, 1/2, 0]");
}

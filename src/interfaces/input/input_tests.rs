use std::env;
use std::fs;

use crate::angmom::spin::HalfSpin;
use crate::interfaces::input::Input;
use crate::interfaces::InputHandle;

#[test]
fn test_input_default_round_trip() {
    let input = Input::default();
    let yaml = serde_yaml::to_string(&input).unwrap();
    let recovered: Input = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(recovered.generation.n_electrons, 4);
    assert_eq!(recovered.generation.total_spin, HalfSpin::zero());
    assert_eq!(recovered.generation.projection, HalfSpin::zero());
    assert!(recovered.generation.write_distribution);
}

#[test]
fn test_input_deserialisation() {
    let yaml = r"
generation:
  n_electrons: 3
  total_spin: 1/2
  projection: -1/2
  write_distribution: false
";
    let input: Input = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(input.generation.n_electrons, 3);
    assert_eq!(input.generation.total_spin, HalfSpin::one_half());
    assert_eq!(input.generation.projection, HalfSpin::from_twice(-1));
    assert!(!input.generation.write_distribution);
    assert!(input.generation.result_save_name.is_none());
}

#[test]
fn test_input_from_yaml_file_and_handle() {
    let path = env::temp_dir().join("gencsf_input_test.yml");
    fs::write(
        &path,
        "generation:\n  n_electrons: 2\n  total_spin: 1\n  projection: 0\n",
    )
    .unwrap();
    let input = Input::from_yaml_file(&path).unwrap();
    assert_eq!(input.generation.n_electrons, 2);
    assert_eq!(input.generation.total_spin, HalfSpin::from_twice(2));
    input.handle().unwrap();

    assert!(Input::from_yaml_file(env::temp_dir().join("gencsf_no_such_input.yml")).is_err());
}

#[test]
fn test_input_rejects_invalid_spin() {
    let yaml = "generation:\n  n_electrons: 2\n  total_spin: 1/3\n  projection: 0\n";
    assert!(serde_yaml::from_str::<Input>(yaml).is_err());
}

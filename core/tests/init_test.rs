use wf_core::Wayfarer;

use tempfile::tempdir;

// Installs the global subscriber, so it lives in its own test binary.
#[test]
fn init_writes_default_config_and_installs_logging() {
	let dir = tempdir().unwrap();

	let wayfarer = Wayfarer::init(dir.path()).unwrap();

	assert!(dir.path().join("wayfarer.json").exists());
	assert_eq!(wayfarer.config().suggestion_limit, 6);
	assert!(wayfarer.backend().api_url().ends_with("/api"));

	// a second subscriber can't be installed
	assert!(Wayfarer::init(dir.path()).is_err());
}

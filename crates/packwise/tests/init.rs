use packwise::domain::config::ApiConfig;
use packwise::features::packing::Packing;

#[test]
fn init_creates_packing_slice() {
    let slices = packwise::init(&ApiConfig::default()).expect("init should succeed");
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].id, std::any::TypeId::of::<Packing>());
}

#[test]
fn init_rejects_zero_ceiling() {
    let mut config = ApiConfig::default();
    config.packing.max_order = 0;
    assert!(packwise::init(&config).is_err());
}

#[test]
fn packing_is_always_enabled() {
    assert!(packwise::features::is_enabled("packing"));
    assert!(!packwise::features::is_enabled("desktop"));
}

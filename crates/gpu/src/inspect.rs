//! Adapter and device introspection, logged at startup.

use wgpu::{Adapter, Device, Features, Limits};

/// Log what the selected adapter is and what it supports.
pub fn inspect_adapter(adapter: &Adapter) {
    let info = adapter.get_info();
    tracing::info!(
        "Using GPU adapter: {} ({:?}, {:?})",
        info.name,
        info.backend,
        info.device_type
    );
    if !info.driver.is_empty() {
        tracing::debug!("Driver: {} {}", info.driver, info.driver_info);
    }

    for line in describe_limits(&adapter.limits()) {
        tracing::debug!("Adapter limit {line}");
    }
    log_features("Adapter", adapter.features());
}

/// Log the limits and features the device was actually created with.
pub fn inspect_device(device: &Device) {
    for line in describe_limits(&device.limits()) {
        tracing::debug!("Device limit {line}");
    }
    log_features("Device", device.features());
}

fn log_features(owner: &str, features: Features) {
    let names = feature_names(features);
    if names.is_empty() {
        tracing::debug!("{owner} features: none");
    } else {
        tracing::debug!("{owner} features: {}", names.join(", "));
    }
}

/// The texture limits worth reporting, as `name: value` lines.
pub fn describe_limits(limits: &Limits) -> Vec<String> {
    vec![
        format!(
            "max_texture_dimension_1d: {}",
            limits.max_texture_dimension_1d
        ),
        format!(
            "max_texture_dimension_2d: {}",
            limits.max_texture_dimension_2d
        ),
        format!(
            "max_texture_dimension_3d: {}",
            limits.max_texture_dimension_3d
        ),
        format!(
            "max_texture_array_layers: {}",
            limits.max_texture_array_layers
        ),
    ]
}

/// Names of the enabled feature flags.
pub fn feature_names(features: Features) -> Vec<&'static str> {
    features.iter_names().map(|(name, _)| name).collect()
}

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::{DeviceClass, MotionConfig};
use crate::dom;

/// Leaves exactly one device class on `body`.
pub fn apply_device_class(document: &Document, config: &MotionConfig) -> Result<(), JsValue> {
    let class_list = dom::body(document)?.class_list();
    for device in DeviceClass::ALL {
        if device != config.device {
            class_list.remove_1(device.body_class())?;
        }
    }
    class_list.add_1(config.device.body_class())?;
    log::debug!(
        "Device tuned to {:?} (stagger {}ms)",
        config.device,
        config.stagger_delay_ms
    );
    Ok(())
}

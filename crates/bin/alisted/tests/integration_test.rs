//! End-to-end tests for the full alisted stack.
//!
//! Each test wires the virtual hub, both platforms and a registry publishing
//! to an in-process state bus, then drives it through service calls and
//! simulated hub pushes.

use std::sync::Arc;

use aliste_adapter_entities::{AlisteEntity, AlisteFan, AlisteLight, fan, light};
use aliste_adapter_virtual::{VirtualDevice, VirtualDeviceConfig, VirtualHub};
use aliste_app::hub_store::HubStore;
use aliste_app::ports::{DeviceHandle, Hub};
use aliste_app::services::entity_registry::EntityRegistry;
use aliste_app::state_bus::InProcessStateBus;
use aliste_domain::device::{DOMAIN, DeviceType};
use aliste_domain::entity::{AttributeValue, EntitySnapshot, EntityState};
use aliste_domain::error::AlisteError;
use aliste_domain::id::{ConfigEntryId, UniqueId};
use aliste_domain::service::ServiceCall;
use tokio::sync::broadcast;

type Registry = EntityRegistry<AlisteEntity<VirtualDevice>, Arc<InProcessStateBus>>;

struct Stack {
    hub: Arc<VirtualHub>,
    registry: Registry,
    updates: broadcast::Receiver<EntitySnapshot>,
}

fn channel(switch_id: &str, name: &str, device_type: DeviceType) -> VirtualDeviceConfig {
    VirtualDeviceConfig {
        device_id: "e2e0".to_string(),
        switch_id: switch_id.to_string(),
        room_name: "Office".to_string(),
        name: name.to_string(),
        device_type,
        switch_state: "0".to_string(),
        offline: false,
    }
}

fn stack() -> Stack {
    let hub = Arc::new(
        VirtualHub::from_configs([
            channel("0", "Fan", DeviceType::Fan),
            channel("1", "Lamp", DeviceType::Light),
            channel("2", "Blind", DeviceType::Curtain),
        ])
        .expect("static channels are valid"),
    );
    let entry_id = ConfigEntryId::new();
    let hubs = HubStore::new();
    hubs.insert(DOMAIN, entry_id, Arc::clone(&hub));

    let bus = Arc::new(InProcessStateBus::new(64));
    let updates = bus.subscribe();
    let registry = EntityRegistry::new(bus);

    fan::setup_entry(&hubs, entry_id, &|fans: Vec<AlisteFan<VirtualDevice>>| {
        registry.add_entities(fans.into_iter().map(AlisteEntity::Fan).collect());
    })
    .expect("fan setup");
    light::setup_entry(&hubs, entry_id, &|lights: Vec<AlisteLight<VirtualDevice>>| {
        registry.add_entities(lights.into_iter().map(AlisteEntity::Light).collect());
    })
    .expect("light setup");

    Stack {
        hub,
        registry,
        updates,
    }
}

fn fan_id() -> UniqueId {
    UniqueId::from("e2e0_0")
}

fn lamp_id() -> UniqueId {
    UniqueId::from("e2e0_1")
}

fn drain(updates: &mut broadcast::Receiver<EntitySnapshot>) {
    while updates.try_recv().is_ok() {}
}

#[tokio::test]
async fn should_register_fans_and_lights_only() {
    let Stack { registry, .. } = stack();
    assert_eq!(registry.unique_ids(), vec![fan_id(), lamp_id()]);
}

#[tokio::test]
async fn should_publish_initial_states() {
    let Stack { mut updates, .. } = stack();

    let first = updates.try_recv().unwrap();
    let second = updates.try_recv().unwrap();

    assert_eq!(first.unique_id, fan_id());
    assert_eq!(first.name, "Office Fan");
    assert_eq!(first.state, EntityState::Off);
    assert_eq!(second.unique_id, lamp_id());
    assert_eq!(second.icon, "mdi:lightbulb");
}

#[tokio::test]
async fn should_turn_fan_on_to_medium_and_publish() {
    let Stack {
        hub,
        registry,
        mut updates,
    } = stack();
    drain(&mut updates);

    registry
        .call_service(&fan_id(), ServiceCall::turn_on())
        .await
        .unwrap();

    let device = hub.device(&fan_id()).unwrap();
    assert_eq!(device.switch_state(), "0.5");

    let snapshot = updates.try_recv().unwrap();
    assert_eq!(snapshot.state, EntityState::On);
    assert_eq!(
        snapshot.get_attribute("preset_mode"),
        Some(&AttributeValue::from("Medium"))
    );
    assert_eq!(registry.state(&fan_id()).unwrap().state, EntityState::On);
}

#[tokio::test]
async fn should_remember_preset_across_off() {
    let Stack { hub, registry, .. } = stack();
    let call = ServiceCall::from_parts(
        "set_preset_mode",
        serde_json::json!({ "preset_mode": "Max" }),
    )
    .unwrap();

    registry.call_service(&fan_id(), call).await.unwrap();
    registry
        .call_service(&fan_id(), ServiceCall::TurnOff)
        .await
        .unwrap();

    let snapshot = registry.state(&fan_id()).unwrap();
    assert_eq!(snapshot.state, EntityState::Off);
    assert_eq!(
        snapshot.get_attribute("preset_mode"),
        Some(&AttributeValue::from("Max"))
    );

    registry
        .call_service(&fan_id(), ServiceCall::turn_on())
        .await
        .unwrap();
    assert_eq!(hub.device(&fan_id()).unwrap().switch_state(), "1");
}

#[tokio::test]
async fn should_reject_unknown_preset_without_touching_device() {
    let Stack { hub, registry, .. } = stack();

    let result = registry
        .call_service(&fan_id(), ServiceCall::SetPresetMode("Turbo".to_string()))
        .await;

    assert!(matches!(result, Err(AlisteError::UnknownPresetMode(_))));
    assert_eq!(hub.device(&fan_id()).unwrap().switch_state(), "0");
}

#[tokio::test]
async fn should_switch_lamp_on_and_off() {
    let Stack { hub, registry, .. } = stack();

    registry
        .call_service(&lamp_id(), ServiceCall::turn_on())
        .await
        .unwrap();
    assert_eq!(registry.state(&lamp_id()).unwrap().state, EntityState::On);

    registry
        .call_service(&lamp_id(), ServiceCall::TurnOff)
        .await
        .unwrap();
    assert_eq!(hub.device(&lamp_id()).unwrap().switch_state(), "0");
    assert_eq!(registry.state(&lamp_id()).unwrap().state, EntityState::Off);
}

#[tokio::test]
async fn should_publish_external_changes() {
    let Stack {
        hub,
        registry,
        mut updates,
    } = stack();
    drain(&mut updates);

    hub.device(&fan_id()).unwrap().set_external_state("0.25");

    let snapshot = updates.try_recv().unwrap();
    assert_eq!(snapshot.unique_id, fan_id());
    assert_eq!(
        snapshot.get_attribute("percentage"),
        Some(&AttributeValue::from(25.0))
    );
    assert_eq!(
        registry
            .state(&fan_id())
            .unwrap()
            .get_attribute("preset_mode"),
        Some(&AttributeValue::from("Low"))
    );
}

#[tokio::test]
async fn should_surface_offline_device_as_device_error() {
    let Stack { hub, registry, .. } = stack();
    hub.device(&lamp_id()).unwrap().set_offline(true);

    let result = registry
        .call_service(&lamp_id(), ServiceCall::turn_on())
        .await;

    assert!(matches!(result, Err(AlisteError::Device(_))));
}

#[tokio::test]
async fn should_report_unknown_entity() {
    let Stack { registry, .. } = stack();

    let result = registry
        .call_service(&UniqueId::from("e2e0_2"), ServiceCall::turn_on())
        .await;

    assert!(matches!(result, Err(AlisteError::NotFound(_))));
}

#[tokio::test]
async fn should_stop_publishing_after_removal() {
    let Stack {
        hub,
        registry,
        mut updates,
    } = stack();
    drain(&mut updates);

    registry.remove(&fan_id()).unwrap();
    let device = hub.device(&fan_id()).unwrap();
    device.set_external_state("1");

    assert_eq!(device.callback_count(), 0);
    assert!(updates.try_recv().is_err());
    assert!(registry.state(&fan_id()).is_none());
}

#[tokio::test]
async fn should_detach_everything_on_shutdown() {
    let Stack { hub, registry, .. } = stack();

    registry.shutdown();

    assert!(registry.is_empty());
    for device in hub.devices() {
        assert_eq!(device.callback_count(), 0);
    }
}

//! Test doubles shared by the fan and light tests.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use aliste_app::ports::{DeviceHandle, Hub, StateCallback, StateWriter};
use aliste_domain::device::DeviceType;
use aliste_domain::error::AlisteError;
use aliste_domain::id::UniqueId;
use aliste_domain::switch_state::SwitchState;

/// A command the entity sent to the device.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    Dim(f64),
    TurnOn,
    TurnOff,
}

/// Device handle that records commands instead of executing them.
///
/// The reported state only changes through [`RecordingDevice::set_state`],
/// which lets tests hold the state at `0` while commands are issued.
pub(crate) struct RecordingDevice {
    device_id: String,
    switch_id: String,
    device_type: DeviceType,
    state: Mutex<String>,
    commands: Mutex<Vec<Command>>,
    callbacks: Mutex<Vec<StateCallback>>,
    offline: AtomicBool,
}

impl RecordingDevice {
    pub(crate) fn new(device_id: &str, switch_id: &str, device_type: DeviceType) -> Self {
        Self {
            device_id: device_id.to_string(),
            switch_id: switch_id.to_string(),
            device_type,
            state: Mutex::new("0".to_string()),
            commands: Mutex::default(),
            callbacks: Mutex::default(),
            offline: AtomicBool::new(false),
        }
    }

    pub(crate) fn fan(state: &str) -> Arc<Self> {
        let device = Self::new("5c0a7e", "2", DeviceType::Fan);
        device.set_state(state);
        Arc::new(device)
    }

    pub(crate) fn light(state: &str) -> Arc<Self> {
        let device = Self::new("9f11d0", "0", DeviceType::Light);
        device.set_state(state);
        Arc::new(device)
    }

    /// Change the reported state and notify callbacks, as the hub would.
    pub(crate) fn set_state(&self, raw: &str) {
        *self.state.lock().unwrap() = raw.to_string();
        let callbacks = self.callbacks.lock().unwrap().clone();
        for cb in callbacks {
            cb();
        }
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub(crate) fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }

    pub(crate) fn callback_count(&self) -> usize {
        self.callbacks.lock().unwrap().len()
    }

    fn record(&self, command: Command) -> Result<(), AlisteError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AlisteError::Device(Box::new(std::io::Error::other(
                "hub unreachable",
            ))));
        }
        self.commands.lock().unwrap().push(command);
        Ok(())
    }
}

impl DeviceHandle for RecordingDevice {
    fn device_id(&self) -> &str {
        &self.device_id
    }

    fn switch_id(&self) -> &str {
        &self.switch_id
    }

    fn room_name(&self) -> &str {
        "Bedroom"
    }

    fn name(&self) -> &str {
        match self.device_type {
            DeviceType::Fan => "Ceiling Fan",
            _ => "Lamp",
        }
    }

    fn device_type(&self) -> DeviceType {
        self.device_type
    }

    fn switch_state(&self) -> String {
        self.state.lock().unwrap().clone()
    }

    fn dim(&self, level: SwitchState) -> impl Future<Output = Result<(), AlisteError>> + Send {
        let result = self.record(Command::Dim(level.level()));
        async move { result }
    }

    fn turn_on(&self) -> impl Future<Output = Result<(), AlisteError>> + Send {
        let result = self.record(Command::TurnOn);
        async move { result }
    }

    fn turn_off(&self) -> impl Future<Output = Result<(), AlisteError>> + Send {
        let result = self.record(Command::TurnOff);
        async move { result }
    }

    fn register_callback(&self, callback: StateCallback) {
        self.callbacks.lock().unwrap().push(callback);
    }

    fn remove_callback(&self, callback: &StateCallback) {
        self.callbacks
            .lock()
            .unwrap()
            .retain(|cb| !Arc::ptr_eq(cb, callback));
    }
}

/// Hub over a fixed device list.
pub(crate) struct StaticHub(pub(crate) Vec<Arc<RecordingDevice>>);

impl Hub for StaticHub {
    type Device = RecordingDevice;

    fn devices(&self) -> Vec<Arc<RecordingDevice>> {
        self.0.clone()
    }
}

/// State writer that records which entities asked for a write.
#[derive(Default)]
pub(crate) struct RecordingWriter {
    writes: Mutex<Vec<UniqueId>>,
    count: AtomicUsize,
}

impl RecordingWriter {
    pub(crate) fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub(crate) fn writes(&self) -> Vec<UniqueId> {
        self.writes.lock().unwrap().clone()
    }
}

impl StateWriter for RecordingWriter {
    fn write_state(&self, unique_id: &UniqueId) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.writes.lock().unwrap().push(unique_id.clone());
    }
}

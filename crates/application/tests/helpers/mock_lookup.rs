#![allow(dead_code)]

use hostd_application::ports::AddressLookup;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockAddressLookup {
    entries: Arc<Mutex<HashMap<String, Ipv4Addr>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAddressLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, name: &str, address: &str) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(name.to_string(), address.parse().unwrap());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl AddressLookup for MockAddressLookup {
    fn lookup(&self, name: &str) -> Option<Ipv4Addr> {
        self.calls.lock().unwrap().push(name.to_string());
        self.entries.lock().unwrap().get(name).copied()
    }
}

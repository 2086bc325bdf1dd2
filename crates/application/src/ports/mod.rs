mod address_lookup;

pub use address_lookup::AddressLookup;

mod mock_lookup;

pub use mock_lookup::MockAddressLookup;

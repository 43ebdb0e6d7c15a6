// Reactive state shared between the synchronizer and consumers.

mod data_store;

pub use data_store::DataStore;

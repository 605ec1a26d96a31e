pub mod amount;
pub mod catalog;
pub mod classifier;
pub mod csv;
pub mod machine;
pub mod model;

pub use amount::Amount;
pub use catalog::{Catalog, Code};
pub use classifier::{Classification, classify};
pub use machine::{MachineError, VendingMachine};
pub use model::{Coin, Denomination, Event, Measure, Product};

pub mod card;
pub mod list;

pub use list::PurchasesPage;

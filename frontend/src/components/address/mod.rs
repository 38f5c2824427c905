mod modal;
mod picker;

pub use modal::AddressModal;
pub use picker::AddressPicker;

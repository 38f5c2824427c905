use crate::sdk::daum::PostcodeAddress;

/// Postcode modal state and the address picked through it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressPicker {
    open: bool,
    picked: String,
}

impl AddressPicker {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Empty until something is picked.
    pub fn picked(&self) -> &str {
        &self.picked
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn complete(&mut self, address: PostcodeAddress) {
        self.open = false;
        self.picked = address.address;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interfacing::effective_address;

    fn picked(address: &str) -> PostcodeAddress {
        PostcodeAddress {
            address: address.into(),
        }
    }

    #[test]
    fn completing_updates_address_and_closes() {
        let mut picker = AddressPicker::default();
        picker.toggle();
        assert!(picker.is_open());

        picker.complete(picked("서울 중구 세종대로 110"));

        assert!(!picker.is_open());
        assert_eq!(picker.picked(), "서울 중구 세종대로 110");
    }

    #[test]
    fn cancel_keeps_previous_address() {
        let mut picker = AddressPicker::default();
        picker.toggle();
        picker.complete(picked("서울 중구 세종대로 110"));

        picker.toggle();
        picker.toggle();

        assert!(!picker.is_open());
        assert_eq!(picker.picked(), "서울 중구 세종대로 110");
    }

    #[test]
    fn picked_address_replaces_saved_one_in_display() {
        let mut picker = AddressPicker::default();
        assert_eq!(
            effective_address(picker.picked(), Some("부산 해운대구 우동")),
            "부산 해운대구 우동"
        );

        picker.toggle();
        picker.complete(picked("제주 제주시 첨단로 242"));

        assert_eq!(
            effective_address(picker.picked(), Some("부산 해운대구 우동")),
            "제주 제주시 첨단로 242"
        );
    }
}

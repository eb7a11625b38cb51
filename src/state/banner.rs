//! Global success banner state.
//!
//! Every `show` issues a new ticket and only the latest ticket can hide the
//! banner, so a newer message always gets its full display time.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

/// Handle for the hide timer of one `show` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerState {
    pub message: String,
    pub visible: bool,
    generation: u64,
}

impl BannerState {
    /// Replace the current message and make the banner visible.
    pub fn show(&mut self, message: impl Into<String>) -> BannerTicket {
        self.generation = self.generation.wrapping_add(1);
        self.message = message.into();
        self.visible = true;
        BannerTicket(self.generation)
    }

    /// Hide the banner if `ticket` is still current. Returns whether it hid.
    pub fn hide(&mut self, ticket: BannerTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }
}

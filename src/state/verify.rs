//! Identity-verification modal state machine.
//!
//! DESIGN
//! ======
//! Three confirm stages gate a simulated download. Every stage is cosmetic;
//! the flow cannot fail, skip, or reverse. Closing is refused only while the
//! simulated download is in flight.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

/// Delay before the simulated download completes.
pub const DOWNLOAD_DELAY_MS: u32 = 1_800;

/// Number of confirm stages ahead of the download.
pub const STEP_COUNT: usize = 3;

/// Step descriptions shown in the modal, in walk order.
pub const STEP_TITLES: [&str; STEP_COUNT] = [
    "Confirm you are a member of NBSC",
    "Confirm you are the person named in the report",
    "Release and download the encrypted report",
];

/// Stages of the verification flow, in walk order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerifyStage {
    #[default]
    Closed,
    /// First confirm: NBSC membership.
    Membership,
    /// Second confirm: the requester is the named person.
    Identity,
    /// Final confirm before the download starts.
    Release,
    /// Simulated download in flight; the action button is disabled.
    Downloading,
}

/// Verification modal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerifyFlow {
    pub stage: VerifyStage,
}

impl VerifyFlow {
    /// Open the modal at the first stage, resetting all step markers.
    pub fn open(&mut self) {
        self.stage = VerifyStage::Membership;
    }

    /// Close the modal. Ignored while the download is in flight.
    pub fn close(&mut self) {
        if self.stage != VerifyStage::Downloading {
            self.stage = VerifyStage::Closed;
        }
    }

    /// Advance one stage. Returns `true` when this call starts the simulated
    /// download, so the caller can schedule its completion.
    pub fn advance(&mut self) -> bool {
        self.stage = match self.stage {
            VerifyStage::Closed | VerifyStage::Downloading => return false,
            VerifyStage::Membership => VerifyStage::Identity,
            VerifyStage::Identity => VerifyStage::Release,
            VerifyStage::Release => VerifyStage::Downloading,
        };
        self.stage == VerifyStage::Downloading
    }

    /// Finish the simulated download and close the modal. Returns the
    /// completion toast payload, or `None` when no download was in flight.
    pub fn finish_download(&mut self) -> Option<(&'static str, &'static str)> {
        if self.stage != VerifyStage::Downloading {
            return None;
        }
        self.stage = VerifyStage::Closed;
        log::debug!("simulated report download finished");
        Some(("PDF Downloaded!", "The encrypted complaint report has been saved."))
    }

    pub fn is_open(self) -> bool {
        self.stage != VerifyStage::Closed
    }

    pub fn is_downloading(self) -> bool {
        self.stage == VerifyStage::Downloading
    }

    /// Number of steps marked done, 0..=3.
    pub fn steps_done(self) -> usize {
        match self.stage {
            VerifyStage::Closed | VerifyStage::Membership => 0,
            VerifyStage::Identity => 1,
            VerifyStage::Release => 2,
            VerifyStage::Downloading => STEP_COUNT,
        }
    }

    /// Whether the zero-based step marker is done.
    pub fn step_done(self, index: usize) -> bool {
        index < self.steps_done()
    }

    /// Current action-button label.
    pub fn button_label(self) -> &'static str {
        match self.stage {
            VerifyStage::Closed | VerifyStage::Membership => "I am a member of NBSC →",
            VerifyStage::Identity => "I am the named person →",
            VerifyStage::Release => "Download Encrypted PDF 📥",
            VerifyStage::Downloading => "⏳ Downloading…",
        }
    }

    /// The action button is disabled while the download is in flight.
    pub fn button_enabled(self) -> bool {
        !self.is_downloading()
    }
}

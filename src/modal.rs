//! Contribution Modal State
//!
//! Closed → Open → Submitting transitions and the vote draft they carry.

use crate::error::ContributionError;
use crate::models::{ContributionRequest, VoteStatus};
use crate::render::VoteTarget;

/// Form state of the contribution modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteDraft {
    pub item_key: String,
    pub status: VoteStatus,
    /// Shortened item description for the modal header
    pub item_desc: String,
    pub link: String,
    pub comment: String,
}

impl VoteDraft {
    /// Fresh draft for a clicked vote button; link and comment start empty
    pub fn for_target(target: VoteTarget) -> Self {
        Self {
            item_key: target.item_key,
            status: target.status,
            item_desc: target.item_desc,
            link: String::new(),
            comment: String::new(),
        }
    }

    /// Request body, or [`ContributionError::MissingLink`] for a blank link
    pub fn to_request(&self) -> Result<ContributionRequest, ContributionError> {
        let link = self.link.trim();
        if link.is_empty() {
            return Err(ContributionError::MissingLink);
        }
        Ok(ContributionRequest {
            item_key: self.item_key.clone(),
            status: self.status,
            link: link.to_string(),
            comment: self.comment.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(VoteDraft),
    Submitting(VoteDraft),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    /// Vote button clicked by an authenticated user
    VoteClicked(VoteTarget),
    /// Close control or backdrop click
    Dismissed,
    SubmitStarted,
    SubmitFailed,
    SubmitSucceeded,
}

impl ModalState {
    /// Apply an event; events that do not fit the current state are ignored
    pub fn apply(self, event: ModalEvent) -> ModalState {
        match (self, event) {
            (ModalState::Closed, ModalEvent::VoteClicked(target)) => {
                ModalState::Open(VoteDraft::for_target(target))
            }
            (ModalState::Open(_), ModalEvent::Dismissed) => ModalState::Closed,
            (ModalState::Open(draft), ModalEvent::SubmitStarted) => ModalState::Submitting(draft),
            (ModalState::Submitting(draft), ModalEvent::SubmitFailed) => ModalState::Open(draft),
            (ModalState::Submitting(_), ModalEvent::SubmitSucceeded) => ModalState::Closed,
            (state, _) => state,
        }
    }

    /// Open the modal for `target`, unless the viewer is anonymous
    pub fn open(self, target: VoteTarget, authenticated: bool) -> Result<ModalState, ContributionError> {
        if !authenticated {
            return Err(ContributionError::NotAuthenticated);
        }
        Ok(self.apply(ModalEvent::VoteClicked(target)))
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ModalState::Submitting(_))
    }

    pub fn draft(&self) -> Option<&VoteDraft> {
        match self {
            ModalState::Closed => None,
            ModalState::Open(draft) | ModalState::Submitting(draft) => Some(draft),
        }
    }

    /// Edit the draft while the form is editable
    pub fn edit(&mut self, f: impl FnOnce(&mut VoteDraft)) {
        if let ModalState::Open(draft) = self {
            f(draft);
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Enviando..."
        } else {
            "Enviar Contribuição"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> VoteTarget {
        VoteTarget {
            item_key: "123-2024-1-1".to_string(),
            status: VoteStatus::Sobrepreco,
            item_desc: "Caneta...".to_string(),
        }
    }

    fn open_state() -> ModalState {
        ModalState::Closed.open(target(), true).unwrap()
    }

    #[test]
    fn test_open_requires_authentication() {
        assert_eq!(
            ModalState::Closed.open(target(), false),
            Err(ContributionError::NotAuthenticated)
        );
    }

    #[test]
    fn test_open_prefills_draft_and_resets_inputs() {
        let state = open_state();
        let draft = state.draft().unwrap();
        assert_eq!(draft.item_key, "123-2024-1-1");
        assert_eq!(draft.status, VoteStatus::Sobrepreco);
        assert!(draft.link.is_empty());
        assert!(draft.comment.is_empty());
        assert!(state.is_visible());
    }

    #[test]
    fn test_dismiss_closes_open_modal() {
        assert_eq!(open_state().apply(ModalEvent::Dismissed), ModalState::Closed);
    }

    #[test]
    fn test_submit_lifecycle() {
        let submitting = open_state().apply(ModalEvent::SubmitStarted);
        assert!(submitting.is_submitting());
        assert_eq!(submitting.submit_label(), "Enviando...");

        let reopened = submitting.clone().apply(ModalEvent::SubmitFailed);
        assert!(matches!(reopened, ModalState::Open(_)));
        assert_eq!(reopened.submit_label(), "Enviar Contribuição");

        assert_eq!(submitting.apply(ModalEvent::SubmitSucceeded), ModalState::Closed);
    }

    #[test]
    fn test_out_of_place_events_are_ignored() {
        assert_eq!(ModalState::Closed.apply(ModalEvent::SubmitStarted), ModalState::Closed);
        let submitting = open_state().apply(ModalEvent::SubmitStarted);
        assert_eq!(submitting.clone().apply(ModalEvent::Dismissed), submitting);
        assert_eq!(open_state().apply(ModalEvent::SubmitSucceeded), open_state());
    }

    #[test]
    fn test_edit_only_while_open() {
        let mut state = open_state();
        state.edit(|d| d.link = "https://ata.example".to_string());
        assert_eq!(state.draft().unwrap().link, "https://ata.example");

        let mut submitting = state.apply(ModalEvent::SubmitStarted);
        submitting.edit(|d| d.link.clear());
        assert_eq!(submitting.draft().unwrap().link, "https://ata.example");
    }

    #[test]
    fn test_draft_requires_link() {
        let mut draft = VoteDraft::for_target(target());
        draft.link = "   ".to_string();
        assert_eq!(draft.to_request(), Err(ContributionError::MissingLink));

        draft.link = " https://ata.example/1 ".to_string();
        draft.comment = "Ata de registro de preços".to_string();
        let req = draft.to_request().unwrap();
        assert_eq!(req.link, "https://ata.example/1");
        assert_eq!(req.status, VoteStatus::Sobrepreco);
        assert_eq!(req.comment, "Ata de registro de preços");
    }
}

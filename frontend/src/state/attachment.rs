//! Media-attachment state machine.
//!
//! The machine is pure: every transition is a value-to-value function driven
//! by exactly one external event (a user tap or a picker callback), so the
//! whole flow is unit-testable without a rendering framework. The
//! `MediaAttachmentButton` component owns one of these and renders whatever
//! state it is in.

/// Where a picked image can come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSource {
    /// Live camera capture. Yields an image with no raw byte payload.
    Camera,
    /// Photo library. The original byte payload is loaded when possible.
    Library,
    /// Arbitrary document picker. Behaves like the library path.
    Files,
}

impl MediaSource {
    pub fn label(&self) -> &'static str {
        match self {
            MediaSource::Camera => "Take Photo",
            MediaSource::Library => "Photo Library",
            MediaSource::Files => "Browse Files",
        }
    }
}

/// A successfully picked image. `bytes` is `None` on the camera path and on
/// library picks whose byte payload could not be loaded; that is a degraded
/// success, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedMedia {
    /// Client-generated attachment ID
    pub attachment_id: String,
    /// Object URL for the thumbnail preview
    pub object_url: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Option<Vec<u8>>,
    /// Capture timestamp extracted from the byte payload, when present (RFC 3339)
    pub captured_at: Option<String>,
}

/// The attachment control's entire state
#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentState {
    /// Nothing picked; shows the "add" affordance
    Empty,
    /// Source-selection dialog is up
    SourceSelecting,
    /// Platform picker for the chosen source is up; accepts no other input
    Picking(MediaSource),
    /// Shows a thumbnail preview and a removal affordance
    Selected(PickedMedia),
}

/// External events that drive the machine. No transition is spontaneous or
/// timer-driven.
#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentEvent {
    /// User tapped the "add" affordance
    AddRequested,
    /// User chose a source in the selection dialog
    SourceChosen(MediaSource),
    /// User dismissed the selection dialog
    SourceCancelled,
    /// Picker delivered an image
    Picked(PickedMedia),
    /// User cancelled out of the picker
    PickCancelled,
    /// User tapped the removal affordance
    RemoveRequested,
}

impl AttachmentState {
    /// Apply one event. Events that do not apply in the current state leave
    /// it unchanged.
    pub fn apply(self, event: AttachmentEvent) -> AttachmentState {
        match (self, event) {
            (AttachmentState::Empty, AttachmentEvent::AddRequested) => {
                AttachmentState::SourceSelecting
            }
            (AttachmentState::SourceSelecting, AttachmentEvent::SourceChosen(source)) => {
                AttachmentState::Picking(source)
            }
            (AttachmentState::SourceSelecting, AttachmentEvent::SourceCancelled) => {
                AttachmentState::Empty
            }
            (AttachmentState::Picking(_), AttachmentEvent::Picked(media)) => {
                AttachmentState::Selected(media)
            }
            (AttachmentState::Picking(_), AttachmentEvent::PickCancelled) => AttachmentState::Empty,
            (AttachmentState::Selected(_), AttachmentEvent::RemoveRequested) => {
                AttachmentState::Empty
            }
            (state, _) => state,
        }
    }

    /// The held media, when in `Selected`
    pub fn selected(&self) -> Option<&PickedMedia> {
        match self {
            AttachmentState::Selected(media) => Some(media),
            _ => None,
        }
    }

    /// Whether a platform picker is outstanding. While true the control
    /// accepts no other input.
    pub fn is_picking(&self) -> bool {
        matches!(self, AttachmentState::Picking(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(bytes: Option<Vec<u8>>) -> PickedMedia {
        PickedMedia {
            attachment_id: "att-1".to_string(),
            object_url: "blob:fake".to_string(),
            file_name: "walk.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            bytes,
            captured_at: None,
        }
    }

    #[test]
    fn test_happy_path_library() {
        let state = AttachmentState::Empty
            .apply(AttachmentEvent::AddRequested)
            .apply(AttachmentEvent::SourceChosen(MediaSource::Library))
            .apply(AttachmentEvent::Picked(media(Some(vec![1, 2, 3]))));

        let picked = state.selected().expect("should be selected");
        assert_eq!(picked.bytes.as_deref(), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn test_camera_path_carries_no_bytes() {
        let state = AttachmentState::Empty
            .apply(AttachmentEvent::AddRequested)
            .apply(AttachmentEvent::SourceChosen(MediaSource::Camera))
            .apply(AttachmentEvent::Picked(media(None)));

        let picked = state.selected().expect("should be selected");
        assert!(picked.bytes.is_none());
    }

    #[test]
    fn test_degraded_library_pick_is_still_selected() {
        // A failed byte load arrives as a pick with no bytes, never an error
        let state = AttachmentState::Picking(MediaSource::Library)
            .apply(AttachmentEvent::Picked(media(None)));
        assert!(matches!(state, AttachmentState::Selected(_)));
    }

    #[test]
    fn test_cancel_paths_return_to_empty() {
        let state = AttachmentState::SourceSelecting.apply(AttachmentEvent::SourceCancelled);
        assert_eq!(state, AttachmentState::Empty);

        let state =
            AttachmentState::Picking(MediaSource::Camera).apply(AttachmentEvent::PickCancelled);
        assert_eq!(state, AttachmentState::Empty);
    }

    #[test]
    fn test_removal_clears_everything() {
        let state = AttachmentState::Selected(media(Some(vec![9])))
            .apply(AttachmentEvent::RemoveRequested);
        assert_eq!(state, AttachmentState::Empty);
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_inapplicable_events_leave_state_unchanged() {
        // A stray pick result with no picker outstanding is ignored
        let state = AttachmentState::Empty.apply(AttachmentEvent::Picked(media(None)));
        assert_eq!(state, AttachmentState::Empty);

        // Removal only applies to Selected
        let state = AttachmentState::Picking(MediaSource::Library)
            .apply(AttachmentEvent::RemoveRequested);
        assert_eq!(state, AttachmentState::Picking(MediaSource::Library));

        // Add is a no-op while the selection dialog is already up
        let state = AttachmentState::SourceSelecting.apply(AttachmentEvent::AddRequested);
        assert_eq!(state, AttachmentState::SourceSelecting);
    }

    #[test]
    fn test_is_picking_blocks_other_input() {
        assert!(AttachmentState::Picking(MediaSource::Files).is_picking());
        assert!(!AttachmentState::Empty.is_picking());
        assert!(!AttachmentState::Selected(media(None)).is_picking());
    }
}

use crate::error::ValidationError;
use crate::model::Category;
use std::collections::BTreeMap;

/// What the upload slots need to know about a picked file.
pub trait SelectedFile {
    fn file_name(&self) -> String;
    fn mime_type(&self) -> String;
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// How a file reached a slot. Every source ends in the same slot state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSource {
    Click,
    Drop,
    Assigned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Empty,
    Reading,
    Preview,
}

/// Handle for one outstanding file → data URL read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTicket {
    pub category: Category,
    id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadSlot<F> {
    file: Option<F>,
    preview: Option<String>,
    drag_over: bool,
    pending: Option<u64>,
}

impl<F> Default for UploadSlot<F> {
    fn default() -> Self {
        Self {
            file: None,
            preview: None,
            drag_over: false,
            pending: None,
        }
    }
}

impl<F> UploadSlot<F> {
    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn state(&self) -> SlotState {
        match (&self.file, &self.preview) {
            (None, _) => SlotState::Empty,
            (Some(_), None) => SlotState::Reading,
            (Some(_), Some(_)) => SlotState::Preview,
        }
    }
}

/// The four upload slots, one per uploadable category.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSlots<F> {
    slots: BTreeMap<Category, UploadSlot<F>>,
    next_read: u64,
}

impl<F> Default for UploadSlots<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> UploadSlots<F> {
    pub fn new() -> Self {
        Self {
            slots: Category::UPLOADABLE
                .into_iter()
                .map(|category| (category, UploadSlot::default()))
                .collect(),
            next_read: 0,
        }
    }

    pub fn slot(&self, category: Category) -> Option<&UploadSlot<F>> {
        self.slots.get(&category)
    }

    fn slot_mut(&mut self, category: Category) -> Result<&mut UploadSlot<F>, ValidationError> {
        self.slots
            .get_mut(&category)
            .ok_or(ValidationError::NotUploadable(category))
    }

    /// Returns whether the highlight changed.
    pub fn set_drag_over(&mut self, category: Category, drag_over: bool) -> bool {
        match self.slots.get_mut(&category) {
            Some(slot) if slot.drag_over != drag_over => {
                slot.drag_over = drag_over;
                true
            }
            _ => false,
        }
    }

    /// Puts `file` into the slot and hands out the ticket for its preview
    /// read. Dropped files must declare an `image/*` type; on rejection the
    /// slot keeps whatever it held before.
    pub fn select(
        &mut self,
        category: Category,
        file: F,
        source: SlotSource,
    ) -> Result<ReadTicket, ValidationError>
    where
        F: SelectedFile,
    {
        let slot = self.slot_mut(category)?;
        if source == SlotSource::Drop {
            slot.drag_over = false;
            let mime = file.mime_type();
            if !is_image_mime(&mime) {
                log::warn!("Rejected non-image drop on {category}: {mime}");
                return Err(ValidationError::NotAnImage {
                    name: file.file_name(),
                    mime,
                });
            }
        }

        self.next_read += 1;
        let id = self.next_read;
        let slot = self.slot_mut(category)?;
        log::debug!("{category}: selected {} via {source:?}", file.file_name());
        slot.file = Some(file);
        slot.preview = None;
        slot.pending = Some(id);
        Ok(ReadTicket { category, id })
    }

    /// Stores a finished read. Reads for a file the slot no longer holds are
    /// discarded and `false` is returned.
    pub fn set_preview(&mut self, ticket: ReadTicket, data_url: String) -> bool {
        match self.slots.get_mut(&ticket.category) {
            Some(slot) if slot.pending == Some(ticket.id) => {
                slot.preview = Some(data_url);
                slot.pending = None;
                true
            }
            _ => {
                log::debug!("{}: discarded stale preview", ticket.category);
                false
            }
        }
    }

    /// A read that errored empties the slot, unless the slot has moved on
    /// to another file in the meantime.
    pub fn fail_read(&mut self, ticket: ReadTicket) -> bool {
        match self.slots.get_mut(&ticket.category) {
            Some(slot) if slot.pending == Some(ticket.id) => {
                *slot = UploadSlot::default();
                true
            }
            _ => false,
        }
    }

    /// First slot in display order that holds no file.
    pub fn first_empty(&self) -> Option<Category> {
        self.slots
            .iter()
            .find(|(_, slot)| slot.file.is_none())
            .map(|(category, _)| *category)
    }

    /// Empties the slot. Returns whether it held a file.
    pub fn remove(&mut self, category: Category) -> bool {
        match self.slots.get_mut(&category) {
            Some(slot) => {
                let had_file = slot.file.is_some();
                *slot = UploadSlot::default();
                had_file
            }
            None => false,
        }
    }

    /// Selected files in display order.
    pub fn files(&self) -> impl Iterator<Item = (Category, &F)> {
        self.slots
            .iter()
            .filter_map(|(category, slot)| slot.file.as_ref().map(|file| (*category, file)))
    }

    pub fn has_files(&self) -> bool {
        self.files().next().is_some()
    }
}

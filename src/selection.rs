//! Selection state for the upload form.
//!
//! The chosen file, its preview handle and its display label always move
//! together: every choose or clear event replaces the whole triple at once.
//! The preview handle is owned by the entry it belongs to, so replacing or
//! clearing a selection drops the superseded handle and releases its
//! underlying object URL.

/// Anything the form can treat as a picked file.
pub trait MediaFile {
    fn name(&self) -> String;
}

impl MediaFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }
}

/// The two states of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Empty,
    HasFile,
}

struct Entry<F, P> {
    file: F,
    preview: P,
    label: String,
}

/// Holds the current file/preview/label triple, or nothing.
///
/// `F` is the blob type and `P` the preview handle; in the app these are
/// `web_sys::File` and `gloo::file::ObjectUrl`. Keeping them generic lets
/// the transition rules be tested without a browser.
pub struct Selection<F, P> {
    current: Option<Entry<F, P>>,
}

impl<F: MediaFile, P> Selection<F, P> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Handles the file-chooser result. A present file installs a fresh
    /// triple; an absent one (the user cancelled the dialog) resets to
    /// empty, discarding any prior pick. Either way the previous preview
    /// handle is dropped once the new triple is in place.
    pub fn choose(&mut self, file: Option<F>, make_preview: impl FnOnce(&F) -> P) {
        self.current = file.map(|file| {
            let preview = make_preview(&file);
            let label = format!("Archivo seleccionado: {}", file.name());
            Entry {
                file,
                preview,
                label,
            }
        });
    }

    /// Resets to empty. Callers also reset the file input's value so the
    /// same path can be re-selected and still fire a change event.
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn state(&self) -> FormState {
        if self.current.is_some() {
            FormState::HasFile
        } else {
            FormState::Empty
        }
    }

    pub fn file(&self) -> Option<&F> {
        self.current.as_ref().map(|entry| &entry.file)
    }

    pub fn file_name(&self) -> Option<String> {
        self.current.as_ref().map(|entry| entry.file.name())
    }

    pub fn preview(&self) -> Option<&P> {
        self.current.as_ref().map(|entry| &entry.preview)
    }

    /// Display label, empty exactly when no file is selected.
    pub fn label(&self) -> &str {
        self.current
            .as_ref()
            .map(|entry| entry.label.as_str())
            .unwrap_or("")
    }
}

impl<F: MediaFile, P> Default for Selection<F, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakeFile(&'static str);

    impl MediaFile for FakeFile {
        fn name(&self) -> String {
            self.0.to_string()
        }
    }

    /// Stands in for an object URL: records its own revocation on drop.
    struct FakeUrl {
        url: String,
        revoked: Rc<RefCell<Vec<String>>>,
    }

    impl Drop for FakeUrl {
        fn drop(&mut self) {
            self.revoked.borrow_mut().push(self.url.clone());
        }
    }

    struct UrlLog {
        revoked: Rc<RefCell<Vec<String>>>,
    }

    impl UrlLog {
        fn new() -> Self {
            Self {
                revoked: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn url_for(&self, file: &FakeFile) -> FakeUrl {
            FakeUrl {
                url: format!("blob:{}", file.0),
                revoked: Rc::clone(&self.revoked),
            }
        }

        fn revoked(&self) -> Vec<String> {
            self.revoked.borrow().clone()
        }
    }

    fn assert_triple_consistent(selection: &Selection<FakeFile, FakeUrl>) {
        match selection.state() {
            FormState::HasFile => {
                assert!(selection.file().is_some());
                assert!(selection.preview().is_some());
                assert!(!selection.label().is_empty());
            }
            FormState::Empty => {
                assert!(selection.file().is_none());
                assert!(selection.preview().is_none());
                assert!(selection.label().is_empty());
            }
        }
    }

    #[test]
    fn starts_empty() {
        let selection: Selection<FakeFile, FakeUrl> = Selection::new();
        assert_eq!(selection.state(), FormState::Empty);
        assert_triple_consistent(&selection);
    }

    #[test]
    fn choosing_a_file_fills_the_whole_triple() {
        let urls = UrlLog::new();
        let mut selection = Selection::new();

        selection.choose(Some(FakeFile("clip.mp4")), |f| urls.url_for(f));

        assert_eq!(selection.state(), FormState::HasFile);
        assert_eq!(selection.label(), "Archivo seleccionado: clip.mp4");
        assert_eq!(selection.preview().unwrap().url, "blob:clip.mp4");
        assert_triple_consistent(&selection);
        assert!(urls.revoked().is_empty());
    }

    #[test]
    fn replacing_a_file_shows_the_new_name_and_revokes_the_old_url() {
        let urls = UrlLog::new();
        let mut selection = Selection::new();

        selection.choose(Some(FakeFile("a.mp4")), |f| urls.url_for(f));
        selection.choose(Some(FakeFile("b.mov")), |f| urls.url_for(f));

        assert_eq!(selection.state(), FormState::HasFile);
        assert_eq!(selection.label(), "Archivo seleccionado: b.mov");
        assert_eq!(selection.file_name().as_deref(), Some("b.mov"));
        assert_eq!(urls.revoked(), vec!["blob:a.mp4".to_string()]);
    }

    #[test]
    fn cancelled_dialog_resets_even_after_a_valid_pick() {
        let urls = UrlLog::new();
        let mut selection = Selection::new();

        selection.choose(Some(FakeFile("a.mp4")), |f| urls.url_for(f));
        selection.choose(None, |f| urls.url_for(f));

        assert_eq!(selection.state(), FormState::Empty);
        assert_triple_consistent(&selection);
        assert_eq!(urls.revoked(), vec!["blob:a.mp4".to_string()]);
    }

    #[test]
    fn clear_resets_and_revokes() {
        let urls = UrlLog::new();
        let mut selection = Selection::new();

        selection.choose(Some(FakeFile("clip.mp4")), |f| urls.url_for(f));
        selection.clear();

        assert_eq!(selection.state(), FormState::Empty);
        assert_eq!(selection.label(), "");
        assert!(selection.preview().is_none());
        assert_eq!(urls.revoked(), vec!["blob:clip.mp4".to_string()]);
    }

    #[test]
    fn clear_when_empty_is_a_no_op() {
        let urls = UrlLog::new();
        let mut selection: Selection<FakeFile, FakeUrl> = Selection::new();

        selection.clear();

        assert_eq!(selection.state(), FormState::Empty);
        assert!(urls.revoked().is_empty());
    }

    #[test]
    fn triple_stays_consistent_across_event_sequences() {
        let urls = UrlLog::new();
        let mut selection = Selection::new();

        let events: &[Option<FakeFile>] = &[
            Some(FakeFile("a.mp4")),
            Some(FakeFile("b.mov")),
            None,
            Some(FakeFile("c.avi")),
        ];

        for event in events {
            selection.choose(event.clone(), |f| urls.url_for(f));
            assert_triple_consistent(&selection);
            selection.clear();
            assert_triple_consistent(&selection);
        }

        // One revocation per allocated URL, none leaked.
        assert_eq!(
            urls.revoked(),
            vec![
                "blob:a.mp4".to_string(),
                "blob:b.mov".to_string(),
                "blob:c.avi".to_string(),
            ]
        );
    }
}

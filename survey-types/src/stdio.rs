use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{Frame, Key, KeySource, Renderer, SurveyError};

/// Shared handle to the key source and renderer a prompt talks to.
///
/// Cloning is cheap; all clones drive the same terminal. Prompts run strictly
/// one after another on a single thread, so the handles are `Rc<RefCell<_>>`.
#[derive(Clone)]
pub struct Stdio {
    keys: Rc<RefCell<dyn KeySource>>,
    out: Rc<RefCell<dyn Renderer>>,
}

impl Stdio {
    /// Pair a key source with a renderer.
    pub fn new<K, R>(keys: K, out: R) -> Self
    where
        K: KeySource + 'static,
        R: Renderer + 'static,
    {
        Self {
            keys: Rc::new(RefCell::new(keys)),
            out: Rc::new(RefCell::new(out)),
        }
    }

    /// Block until the next key is decoded.
    pub fn read_key(&self) -> Result<Key, SurveyError> {
        self.keys.borrow_mut().read_key()
    }

    pub fn render(&self, frame: &Frame) -> Result<(), SurveyError> {
        self.out.borrow_mut().render(frame)
    }

    pub fn render_error(&self, message: &str) -> Result<(), SurveyError> {
        self.out.borrow_mut().render_error(message)
    }

    /// Switch the input to raw mode until the returned guard is dropped.
    pub fn raw_mode(&self) -> Result<RawMode, SurveyError> {
        self.keys.borrow_mut().enter_raw_mode()?;
        Ok(RawMode {
            keys: Rc::clone(&self.keys),
        })
    }

    /// Hide the cursor until the returned guard is dropped.
    pub fn hidden_cursor(&self) -> Result<HiddenCursor, SurveyError> {
        self.out.borrow_mut().hide_cursor()?;
        Ok(HiddenCursor {
            out: Rc::clone(&self.out),
        })
    }
}

impl fmt::Debug for Stdio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stdio").finish_non_exhaustive()
    }
}

/// Restores the terminal input mode on drop.
#[must_use = "raw mode is left as soon as the guard is dropped"]
pub struct RawMode {
    keys: Rc<RefCell<dyn KeySource>>,
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let Ok(mut keys) = self.keys.try_borrow_mut() else {
            tracing::warn!("key source busy, terminal mode not restored");
            return;
        };
        if let Err(err) = keys.restore_mode() {
            tracing::warn!(error = %err, "failed to restore terminal mode");
        }
    }
}

/// Shows the cursor again on drop.
#[must_use = "the cursor is shown as soon as the guard is dropped"]
pub struct HiddenCursor {
    out: Rc<RefCell<dyn Renderer>>,
}

impl Drop for HiddenCursor {
    fn drop(&mut self) {
        let Ok(mut out) = self.out.try_borrow_mut() else {
            tracing::warn!("renderer busy, cursor not restored");
            return;
        };
        if let Err(err) = out.show_cursor() {
            tracing::warn!(error = %err, "failed to show cursor");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct Flags {
        raw: Cell<bool>,
        hidden: Cell<bool>,
    }

    struct FlagKeys(Rc<Flags>);

    impl KeySource for FlagKeys {
        fn read_key(&mut self) -> Result<Key, SurveyError> {
            Err(SurveyError::Interrupted)
        }

        fn enter_raw_mode(&mut self) -> Result<(), SurveyError> {
            self.0.raw.set(true);
            Ok(())
        }

        fn restore_mode(&mut self) -> Result<(), SurveyError> {
            self.0.raw.set(false);
            Ok(())
        }
    }

    struct FlagRenderer(Rc<Flags>);

    impl Renderer for FlagRenderer {
        fn render(&mut self, _frame: &Frame) -> Result<(), SurveyError> {
            Ok(())
        }

        fn render_error(&mut self, _message: &str) -> Result<(), SurveyError> {
            Ok(())
        }

        fn hide_cursor(&mut self) -> Result<(), SurveyError> {
            self.0.hidden.set(true);
            Ok(())
        }

        fn show_cursor(&mut self) -> Result<(), SurveyError> {
            self.0.hidden.set(false);
            Ok(())
        }
    }

    fn read_under_guards(stdio: &Stdio) -> Result<Key, SurveyError> {
        let _raw = stdio.raw_mode()?;
        let _cursor = stdio.hidden_cursor()?;
        stdio.read_key()
    }

    #[test]
    fn guards_restore_on_error_path() {
        let flags = Rc::new(Flags::default());
        let stdio = Stdio::new(FlagKeys(flags.clone()), FlagRenderer(flags.clone()));

        let result = read_under_guards(&stdio);

        assert!(matches!(result, Err(SurveyError::Interrupted)));
        assert!(!flags.raw.get());
        assert!(!flags.hidden.get());
    }

    #[test]
    fn guards_hold_while_alive() {
        let flags = Rc::new(Flags::default());
        let stdio = Stdio::new(FlagKeys(flags.clone()), FlagRenderer(flags.clone()));

        let raw = stdio.raw_mode().unwrap();
        let cursor = stdio.hidden_cursor().unwrap();
        assert!(flags.raw.get());
        assert!(flags.hidden.get());

        drop(cursor);
        drop(raw);
        assert!(!flags.raw.get());
        assert!(!flags.hidden.get());
    }
}

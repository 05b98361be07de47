use std::borrow::Cow;
use reedline::{
    Prompt,
    PromptEditMode,
    PromptHistorySearch,
    Reedline,
    Signal
};

use contactbook::{
    LineReader,
    core::Result,
};

pub(crate) struct MenuPrompt<'a>(&'a str);

impl<'a> Prompt for MenuPrompt<'a> {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        self.0.into()
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<'_, str> {
        "".into()
    }
}

/// Line editor input for a terminal session. Ctrl-C and Ctrl-D end input.
pub(crate) struct EditorReader {
    editor: Reedline,
}

impl EditorReader {
    pub(crate) fn new() -> Self {
        Self {
            editor: Reedline::create(),
        }
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.read_line(&MenuPrompt(prompt))? {
            Signal::Success(line) => Ok(Some(line)),
            _ => Ok(None),
        }
    }
}

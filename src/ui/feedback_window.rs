use fltk::{
    app,
    button::{Button, CheckButton},
    draw,
    enums::{Align, Color, Event, Font, FrameType, Key},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};
use log::{debug, warn};

use super::buffer::buffer_text;
use super::layout::{self, TextMetrics};
use super::theme::{self, SEPARATOR_RGB, TextBearing};
use crate::app::domain::{FeedbackRequest, FeedbackResult, FontSize, WindowState};

pub const WINDOW_TITLE: &str = "Interactive Feedback MCP";

const MARGIN: i32 = 10;
const SPACING: i32 = 6;

#[derive(Debug, Clone, Copy)]
enum UiMessage {
    TextChanged,
    Resized,
    Submit,
}

pub struct FeedbackWidgets {
    pub window: Window,
    pub flex: Flex,
    pub prompt: Frame,
    pub options: Vec<CheckButton>,
    pub hint: Frame,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub commit: CheckButton,
    pub send: Button,
}

impl FeedbackWidgets {
    /// Every widget that shows text, in layout order
    pub fn text_bearing_mut(&mut self) -> Vec<&mut dyn TextBearing> {
        let mut widgets: Vec<&mut dyn TextBearing> = Vec::with_capacity(self.options.len() + 5);
        widgets.push(&mut self.prompt);
        for option in self.options.iter_mut() {
            widgets.push(option);
        }
        widgets.push(&mut self.hint);
        widgets.push(&mut self.editor);
        widgets.push(&mut self.commit);
        widgets.push(&mut self.send);
        widgets
    }
}

fn build_feedback_window(
    request: &FeedbackRequest,
    metrics: &TextMetrics,
    geometry: WindowState,
) -> FeedbackWidgets {
    let mut window = Window::new(
        geometry.x,
        geometry.y,
        geometry.width,
        geometry.height,
        WINDOW_TITLE,
    );
    window.set_xclass("interactive-feedback");
    window.make_modal(true);

    let mut flex = Flex::new(0, 0, geometry.width, geometry.height, None);
    flex.set_type(FlexType::Column);
    flex.set_margin(MARGIN);
    flex.set_spacing(SPACING);

    // One row until fit_prompt can measure the wrapped label
    let mut prompt = Frame::default().with_label(&request.prompt);
    prompt.set_align(Align::Left | Align::Top | Align::Inside | Align::Wrap);
    flex.fixed(&prompt, metrics.row_height + SPACING);

    let mut options = Vec::with_capacity(request.predefined_options.len());
    for option in &request.predefined_options {
        let check = CheckButton::default().with_label(option);
        flex.fixed(&check, metrics.control_height());
        options.push(check);
    }

    if !options.is_empty() {
        let (r, g, b) = SEPARATOR_RGB;
        let mut separator = Frame::default();
        separator.set_frame(FrameType::FlatBox);
        separator.set_color(Color::from_rgb(r, g, b));
        flex.fixed(&separator, 1);
    }

    let mut hint = Frame::default().with_label("Enter your feedback here (Ctrl+Enter to submit)");
    hint.set_align(Align::Left | Align::Inside);
    hint.set_label_color(Color::from_rgb(SEPARATOR_RGB.0, SEPARATOR_RGB.1, SEPARATOR_RGB.2));
    flex.fixed(&hint, metrics.control_height());

    let buffer = TextBuffer::default();
    let mut editor = TextEditor::default();
    editor.set_buffer(buffer.clone());
    editor.wrap_mode(WrapMode::AtBounds, 0);
    editor.set_text_font(Font::Helvetica);
    flex.fixed(&editor, metrics.initial_text_height());

    let commit = CheckButton::default().with_label("Commit changes when done");
    flex.fixed(&commit, metrics.control_height());

    let send = Button::default().with_label("Send Feedback");
    flex.fixed(&send, metrics.control_height());

    flex.end();
    window.end();
    window.resizable(&flex);

    FeedbackWidgets {
        window,
        flex,
        prompt,
        options,
        hint,
        editor,
        buffer,
        commit,
        send,
    }
}

/// Give the prompt label the height of its word-wrapped rows at the current width
fn fit_prompt(widgets: &mut FeedbackWidgets, metrics: &TextMetrics, font_size: FontSize) {
    draw::set_font(widgets.prompt.label_font(), font_size.as_fltk());
    let usable_width = widgets.window.w() - 2 * MARGIN;
    let rows = layout::wrapped_rows(&widgets.prompt.label(), usable_width, |text| {
        draw::measure(text, false).0
    });

    let height = rows * metrics.row_height + SPACING;
    if widgets.prompt.h() != height {
        widgets.flex.fixed(&widgets.prompt, height);
        widgets.flex.layout();
        widgets.window.redraw();
    }
}

fn adjust_window_size(widgets: &mut FeedbackWidgets, metrics: &TextMetrics, font_size: FontSize) {
    let text = buffer_text(&widgets.buffer);

    draw::set_font(Font::Helvetica, font_size.as_fltk());
    let resize = layout::resize_for_text(
        &text,
        metrics,
        |line| draw::measure(line, false).0,
        widgets.window.h(),
        widgets.editor.h(),
    );

    widgets.flex.fixed(&widgets.editor, resize.text_height);
    let (x, y) = (widgets.window.x(), widgets.window.y());
    widgets
        .window
        .resize(x, y, resize.window_width, resize.window_height);
    fit_prompt(widgets, metrics, font_size);
    widgets.window.redraw();
}

fn collect_result(widgets: &FeedbackWidgets, request: &FeedbackRequest) -> FeedbackResult {
    let selected: Vec<String> = widgets
        .options
        .iter()
        .zip(&request.predefined_options)
        .filter(|(check, _)| check.is_checked())
        .map(|(_, option)| option.clone())
        .collect();

    FeedbackResult::compose(
        &selected,
        &buffer_text(&widgets.buffer),
        widgets.commit.is_checked(),
    )
}

/// Handle every queued message, returning the result once submitted
fn drain_messages(
    widgets: &mut FeedbackWidgets,
    receiver: &app::Receiver<UiMessage>,
    request: &FeedbackRequest,
    metrics: &TextMetrics,
    font_size: FontSize,
) -> Option<FeedbackResult> {
    while let Some(msg) = receiver.recv() {
        match msg {
            UiMessage::TextChanged => adjust_window_size(widgets, metrics, font_size),
            UiMessage::Resized => fit_prompt(widgets, metrics, font_size),
            UiMessage::Submit => {
                let result = collect_result(widgets, request);
                widgets.window.hide();
                return Some(result);
            }
        }
    }
    None
}

/// Show the feedback popup and block until it is submitted or closed.
///
/// Closing the window without submitting yields an empty result.
pub fn run_feedback_window(request: &FeedbackRequest, font_size: FontSize) -> FeedbackResult {
    theme::apply_dark_palette();

    let metrics = TextMetrics::for_font_size(font_size);
    let geometry = WindowState::load().unwrap_or_else(|| {
        let (w, h) = app::screen_size();
        WindowState::centered(w as i32, h as i32)
    });

    let mut widgets = build_feedback_window(request, &metrics, geometry);
    theme::apply_font_size(&mut widgets.text_bearing_mut(), font_size);
    debug!("Feedback window built with font size {}", font_size);

    let (sender, receiver) = app::channel::<UiMessage>();

    let submit_sender = sender.clone();
    widgets.editor.handle(move |_, event| {
        let enter = matches!(app::event_key(), Key::Enter | Key::KPEnter);
        if event == Event::KeyDown && enter && app::is_event_ctrl() {
            submit_sender.send(UiMessage::Submit);
            true
        } else {
            false
        }
    });

    let change_sender = sender.clone();
    widgets
        .buffer
        .add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                change_sender.send(UiMessage::TextChanged);
            }
        });

    let resize_sender = sender.clone();
    let mut last_width = geometry.width;
    widgets.window.resize_callback(move |_, _, _, w, _| {
        if w != last_width {
            last_width = w;
            resize_sender.send(UiMessage::Resized);
        }
    });

    widgets.send.emit(sender, UiMessage::Submit);

    widgets.window.show();
    widgets.editor.take_focus().ok();
    fit_prompt(&mut widgets, &metrics, font_size);

    #[cfg(target_os = "windows")]
    {
        theme::set_windows_dark_titlebar(&widgets.window);
        if let Err(e) = theme::set_windows_topmost(&widgets.window) {
            warn!("Failed to keep the feedback window on top: {}", e);
        }
    }

    let mut result = None;
    while result.is_none() && widgets.window.shown() {
        app::wait();
        result = drain_messages(&mut widgets, &receiver, request, &metrics, font_size);
    }

    let closing = WindowState {
        x: widgets.window.x(),
        y: widgets.window.y(),
        width: widgets.window.w(),
        height: widgets.window.h(),
    };
    if let Err(e) = closing.save() {
        warn!("Failed to save window state: {}", e);
    }

    result.unwrap_or_default()
}

use fltk::{
    app,
    button::{Button, CheckButton},
    frame::Frame,
    prelude::*,
    text::TextEditor,
};

use crate::app::domain::FontSize;

pub const WINDOW_RGB: (u8, u8, u8) = (53, 53, 53);
pub const BASE_RGB: (u8, u8, u8) = (42, 42, 42);
pub const TEXT_RGB: (u8, u8, u8) = (255, 255, 255);
pub const HIGHLIGHT_RGB: (u8, u8, u8) = (42, 130, 218);
pub const SEPARATOR_RGB: (u8, u8, u8) = (127, 127, 127);

/// Switch the whole application to the dark palette
pub fn apply_dark_palette() {
    app::set_scheme(app::Scheme::Gtk);

    let (r, g, b) = WINDOW_RGB;
    app::background(r, g, b);
    let (r, g, b) = BASE_RGB;
    app::background2(r, g, b);
    let (r, g, b) = TEXT_RGB;
    app::foreground(r, g, b);
    let (r, g, b) = HIGHLIGHT_RGB;
    app::set_selection_color(r, g, b);
}

/// A widget that renders text at a configurable point size
pub trait TextBearing {
    fn set_point_size(&mut self, points: i32);
}

impl TextBearing for Frame {
    fn set_point_size(&mut self, points: i32) {
        self.set_label_size(points);
    }
}

impl TextBearing for CheckButton {
    fn set_point_size(&mut self, points: i32) {
        self.set_label_size(points);
    }
}

impl TextBearing for Button {
    fn set_point_size(&mut self, points: i32) {
        self.set_label_size(points);
    }
}

impl TextBearing for TextEditor {
    fn set_point_size(&mut self, points: i32) {
        self.set_label_size(points);
        self.set_text_size(points);
    }
}

/// Apply one point size to every widget given
pub fn apply_font_size(widgets: &mut [&mut dyn TextBearing], size: FontSize) {
    let points = size.as_fltk();
    for widget in widgets.iter_mut() {
        widget.set_point_size(points);
    }
}

/// Set Windows title bar to dark (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_dark_titlebar(window: &fltk::window::Window) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    let on: i32 = 1;

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        // DWMWA_USE_IMMERSIVE_DARK_MODE: 20 on current builds, 19 on 1809-1903
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}

/// Keep the window above other applications' windows.
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_topmost(window: &fltk::window::Window) -> windows::core::Result<()> {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{
        HWND_TOPMOST, SWP_NOMOVE, SWP_NOSIZE, SetWindowPos,
    };

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
        SetWindowPos(hwnd, HWND_TOPMOST, 0, 0, 0, 0, SWP_NOMOVE | SWP_NOSIZE)
    }
}

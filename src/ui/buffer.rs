use std::ffi::{CStr, c_char, c_void};

use fltk::text::TextBuffer;

/// Read the buffer contents and free FLTK's malloc'd copy.
///
/// `TextBuffer::text()` leaks that copy, and the feedback window reads the
/// whole buffer on every edit to resize itself.
pub fn buffer_text(buf: &TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut c_void) -> *mut c_char;
        fn free(ptr: *mut c_void);
    }

    // SAFETY: `buf` is a live FLTK buffer; the returned pointer is either null
    // or a NUL-terminated malloc'd string that we own and release with free().
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut c_void);
        if ptr.is_null() {
            return String::new();
        }
        let text = CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut c_void);
        text
    }
}

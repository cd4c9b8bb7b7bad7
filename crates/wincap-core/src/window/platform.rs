use std::sync::Arc;

use super::directory::WindowSource;

/// The window source for the current platform
pub fn system_source() -> Arc<dyn WindowSource> {
    #[cfg(target_os = "macos")]
    {
        Arc::new(macos::WindowServerSource)
    }

    #[cfg(not(target_os = "macos"))]
    {
        Arc::new(unsupported::UnsupportedSource)
    }
}

#[cfg(target_os = "macos")]
mod macos {
    use std::ffi::c_void;

    use core_foundation::base::TCFType;
    use core_foundation::boolean::{CFBoolean, CFBooleanRef};
    use core_foundation::number::{CFNumber, CFNumberRef};
    use core_foundation::string::{CFString, CFStringRef};
    use core_graphics::window::{
        kCGNullWindowID, kCGWindowListExcludeDesktopElements, kCGWindowListOptionAll,
        kCGWindowListOptionOnScreenOnly,
    };
    use tracing::debug;

    use crate::window::directory::WindowSource;
    use crate::window::errors::WindowError;
    use crate::window::types::{WindowDescriptor, WindowQueryOptions};

    #[link(name = "CoreGraphics", kind = "framework")]
    unsafe extern "C" {
        fn CGWindowListCopyWindowInfo(option: u32, relative_to_window: u32) -> *const c_void;
    }

    #[link(name = "CoreFoundation", kind = "framework")]
    unsafe extern "C" {
        fn CFArrayGetCount(array: *const c_void) -> isize;
        fn CFArrayGetValueAtIndex(array: *const c_void, idx: isize) -> *const c_void;
        fn CFDictionaryGetValue(dict: *const c_void, key: *const c_void) -> *const c_void;
        fn CFRelease(cf: *const c_void);
    }

    /// Normal application windows live on layer 0
    const NORMAL_WINDOW_LAYER: i64 = 0;

    /// Window server enumeration via `CGWindowListCopyWindowInfo`.
    ///
    /// The list comes back front-to-back, so the first normal-layer window is
    /// the one the user is working in and is reported as active.
    pub struct WindowServerSource;

    impl WindowSource for WindowServerSource {
        fn name(&self) -> &'static str {
            "window_server"
        }

        fn shareable_windows(
            &self,
            options: WindowQueryOptions,
        ) -> Result<Vec<WindowDescriptor>, WindowError> {
            let mut flags = kCGWindowListOptionAll;
            if options.on_screen_only {
                flags |= kCGWindowListOptionOnScreenOnly;
            }
            if options.exclude_desktop {
                flags |= kCGWindowListExcludeDesktopElements;
            }

            let key_number = CFString::new("kCGWindowNumber");
            let key_owner = CFString::new("kCGWindowOwnerName");
            let key_name = CFString::new("kCGWindowName");
            let key_onscreen = CFString::new("kCGWindowIsOnscreen");
            let key_layer = CFString::new("kCGWindowLayer");

            let mut windows = Vec::new();
            let mut active_assigned = false;

            // SAFETY: the array is owned by us (Copy rule) and released below;
            // dictionary values are borrowed under the Get rule while it lives.
            unsafe {
                let array = CGWindowListCopyWindowInfo(flags, kCGNullWindowID);
                if array.is_null() {
                    return Err(WindowError::QueryFailed {
                        message: "The window server returned no window list".to_string(),
                    });
                }

                let count = CFArrayGetCount(array);
                for i in 0..count {
                    let dict = CFArrayGetValueAtIndex(array, i);
                    if dict.is_null() {
                        continue;
                    }

                    let Some(number) = dict_get_number(dict, &key_number) else {
                        debug!(event = "core.window.property_access_failed", property = "id");
                        continue;
                    };
                    let Ok(window_id) = u32::try_from(number) else {
                        continue;
                    };

                    let owner = dict_get_string(dict, &key_owner).unwrap_or_default();
                    let title = dict_get_string(dict, &key_name).unwrap_or_default();
                    let on_screen = dict_get_bool(dict, &key_onscreen).unwrap_or(false);
                    let layer = dict_get_number(dict, &key_layer).unwrap_or(-1);

                    let is_active =
                        !active_assigned && is_frontmost_candidate(on_screen, layer, &owner);
                    active_assigned |= is_active;

                    windows.push(WindowDescriptor::new(
                        window_id, owner, title, on_screen, is_active,
                    ));
                }

                CFRelease(array);
            }

            Ok(windows)
        }
    }

    /// Normal-layer, on-screen windows with an owner can be the frontmost one.
    pub(super) fn is_frontmost_candidate(on_screen: bool, layer: i64, owner: &str) -> bool {
        on_screen && layer == NORMAL_WINDOW_LAYER && !owner.is_empty()
    }

    unsafe fn dict_get(dict: *const c_void, key: &CFString) -> *const c_void {
        unsafe { CFDictionaryGetValue(dict, key.as_concrete_TypeRef() as *const c_void) }
    }

    unsafe fn dict_get_number(dict: *const c_void, key: &CFString) -> Option<i64> {
        let val = unsafe { dict_get(dict, key) };
        if val.is_null() {
            return None;
        }
        let num = unsafe { CFNumber::wrap_under_get_rule(val as CFNumberRef) };
        num.to_i64()
    }

    unsafe fn dict_get_string(dict: *const c_void, key: &CFString) -> Option<String> {
        let val = unsafe { dict_get(dict, key) };
        if val.is_null() {
            return None;
        }
        let s = unsafe { CFString::wrap_under_get_rule(val as CFStringRef) };
        Some(s.to_string())
    }

    unsafe fn dict_get_bool(dict: *const c_void, key: &CFString) -> Option<bool> {
        let val = unsafe { dict_get(dict, key) };
        if val.is_null() {
            return None;
        }
        let b = unsafe { CFBoolean::wrap_under_get_rule(val as CFBooleanRef) };
        Some(b.into())
    }
}

#[cfg(not(target_os = "macos"))]
mod unsupported {
    use crate::window::directory::WindowSource;
    use crate::window::errors::WindowError;
    use crate::window::types::{WindowDescriptor, WindowQueryOptions};

    /// Stand-in for platforms without a supported window server
    pub struct UnsupportedSource;

    impl WindowSource for UnsupportedSource {
        fn name(&self) -> &'static str {
            "unsupported"
        }

        fn shareable_windows(
            &self,
            _options: WindowQueryOptions,
        ) -> Result<Vec<WindowDescriptor>, WindowError> {
            Err(WindowError::QueryFailed {
                message: format!(
                    "Window enumeration is only supported on macOS (running on {})",
                    std::env::consts::OS
                ),
            })
        }
    }
}

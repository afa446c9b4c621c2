// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Notifications the viewer sends to its host.
///
/// All methods default to doing nothing, so hosts implement only what they
/// observe. `()` is a host that ignores everything.
pub trait ViewerHost {
    /// The image finished loading (`true`) or a new one started (`false`).
    fn load_changed(&mut self, loaded: bool) {
        let _ = loaded;
    }

    /// A pinch or pan gesture started (`true`) or ended (`false`).
    ///
    /// Calls are paired per gesture. Hosts use this to suspend competing
    /// behavior, such as a swipe-to-dismiss, while the user repositions.
    fn reposition_changed(&mut self, repositioning: bool) {
        let _ = repositioning;
    }

    /// The host's dismiss gesture asked to close the viewer.
    fn request_close(&mut self) {}
}

impl ViewerHost for () {}

impl<H: ViewerHost + ?Sized> ViewerHost for &mut H {
    fn load_changed(&mut self, loaded: bool) {
        (**self).load_changed(loaded);
    }

    fn reposition_changed(&mut self, repositioning: bool) {
        (**self).reposition_changed(repositioning);
    }

    fn request_close(&mut self) {
        (**self).request_close();
    }
}

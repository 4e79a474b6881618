//! Canvas surface lifecycle shared by the animated scenes.
//!
//! A [`Surface`] sizes a canvas to the viewport, acquires its 2D context,
//! drives a [`Scene`] from a `requestAnimationFrame` chain and keeps it in
//! step with window resizes. Everything it attaches is detached again in
//! [`Surface::teardown`], which also runs on drop.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::{debug, error, info};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// A per-frame animated model that can draw itself onto a 2D context.
pub trait Scene: 'static {
	/// Advance every animated field by one frame.
	fn tick(&mut self);
	/// Draw the current frame.
	fn render(&self, ctx: &CanvasRenderingContext2d);
	/// Rescale to a new viewport size.
	fn resize(&mut self, width: f64, height: f64);
}

/// Failures while attaching a scene to the page.
#[derive(Debug, Error)]
pub enum SurfaceError {
	/// Not running inside a browser window.
	#[error("no global window available")]
	NoWindow,
	/// `innerWidth`/`innerHeight` could not be read as numbers.
	#[error("viewport size unavailable")]
	Viewport,
	/// The canvas refused to hand out a 2D context.
	#[error("2d context unavailable: {0}")]
	Context(String),
	/// A window listener could not be registered.
	#[error("failed to register {event} listener: {reason}")]
	Listener {
		/// DOM event name.
		event: &'static str,
		/// Browser supplied reason.
		reason: String,
	},
	/// The first animation frame could not be scheduled.
	#[error("requestAnimationFrame failed: {0}")]
	AnimationFrame(String),
}

fn describe(value: JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// The global browser window.
pub fn host_window() -> Result<Window, SurfaceError> {
	web_sys::window().ok_or(SurfaceError::NoWindow)
}

/// Current `innerWidth` × `innerHeight` of the window.
pub fn viewport_size(window: &Window) -> Result<(f64, f64), SurfaceError> {
	let read = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64());
	match (read(window.inner_width()), read(window.inner_height())) {
		(Some(w), Some(h)) => Ok((w, h)),
		_ => Err(SurfaceError::Viewport),
	}
}

/// Acquire the canvas 2D rendering context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")
		.map_err(|e| SurfaceError::Context(describe(e)))?
		.ok_or_else(|| SurfaceError::Context("canvas returned no context".into()))?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| SurfaceError::Context("context is not a CanvasRenderingContext2d".into()))
}

/// Client coordinates translated into canvas-local pixels.
pub fn local_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(client_x as f64 - rect.left(), client_y as f64 - rect.top())
}

/// Set the CSS cursor shown over the canvas.
pub fn set_cursor(canvas: &HtmlCanvasElement, cursor: &str) {
	let _ = canvas.style().set_property("cursor", cursor);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A canvas bound to a running [`Scene`].
pub struct Surface<S: Scene> {
	canvas: HtmlCanvasElement,
	scene: Rc<RefCell<Option<S>>>,
	frame: FrameCallback,
	frame_id: Rc<Cell<Option<i32>>>,
	on_resize: Option<Closure<dyn FnMut()>>,
}

impl<S: Scene> Surface<S> {
	/// Size `canvas` to the viewport, build the scene into `scene` and start
	/// the frame loop. On error nothing stays attached.
	pub fn mount(
		canvas: HtmlCanvasElement,
		scene: Rc<RefCell<Option<S>>>,
		build: impl FnOnce(f64, f64) -> S,
	) -> Result<Self, SurfaceError> {
		let window = host_window()?;
		let (w, h) = viewport_size(&window)?;
		let ctx = context_2d(&canvas)?;
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		*scene.borrow_mut() = Some(build(w, h));

		let mut surface = Self {
			canvas,
			scene,
			frame: Rc::new(RefCell::new(None)),
			frame_id: Rc::new(Cell::new(None)),
			on_resize: None,
		};
		surface.listen_resize(&window)?;
		surface.start(&window, ctx)?;
		info!("surface mounted at {w}x{h}");
		Ok(surface)
	}

	fn listen_resize(&mut self, window: &Window) -> Result<(), SurfaceError> {
		let (scene, canvas) = (self.scene.clone(), self.canvas.clone());
		let callback = Closure::<dyn FnMut()>::new(move || {
			let Ok((w, h)) = host_window().and_then(|win| viewport_size(&win)) else {
				return;
			};
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
			if let Some(ref mut s) = *scene.borrow_mut() {
				s.resize(w, h);
			}
			debug!("surface resized to {w}x{h}");
		});
		window
			.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
			.map_err(|e| SurfaceError::Listener {
				event: "resize",
				reason: describe(e),
			})?;
		self.on_resize = Some(callback);
		Ok(())
	}

	fn start(&self, window: &Window, ctx: CanvasRenderingContext2d) -> Result<(), SurfaceError> {
		let (scene, frame, frame_id) = (
			self.scene.clone(),
			self.frame.clone(),
			self.frame_id.clone(),
		);
		*self.frame.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut s) = *scene.borrow_mut() {
				s.tick();
				s.render(&ctx);
			}
			if let Some(ref cb) = *frame.borrow() {
				frame_id.set(
					host_window()
						.ok()
						.and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()),
				);
			}
		}));

		let first = match *self.frame.borrow() {
			Some(ref cb) => window
				.request_animation_frame(cb.as_ref().unchecked_ref())
				.map_err(|e| SurfaceError::AnimationFrame(describe(e)))?,
			None => return Ok(()),
		};
		self.frame_id.set(Some(first));
		Ok(())
	}

	/// Stop the frame loop, detach listeners, drop the scene and release the
	/// canvas backing store. Safe to call more than once.
	pub fn teardown(&mut self) {
		let window = host_window().ok();
		if let (Some(id), Some(w)) = (self.frame_id.take(), window.as_ref()) {
			let _ = w.cancel_animation_frame(id);
		}
		let was_running = self.frame.borrow_mut().take().is_some();
		if let Some(cb) = self.on_resize.take() {
			if let Some(w) = window.as_ref() {
				let _ = w.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		self.scene.borrow_mut().take();
		self.canvas.set_width(0);
		self.canvas.set_height(0);
		if was_running {
			info!("surface torn down");
		}
	}
}

impl<S: Scene> Drop for Surface<S> {
	fn drop(&mut self) {
		self.teardown();
	}
}

/// Something attached to the page that has to be detached again.
pub trait Attachment {
	/// Release everything the attachment registered. Called at most once
	/// per attachment by [`SurfaceSlot`].
	fn detach(&mut self);
}

impl<S: Scene> Attachment for Surface<S> {
	fn detach(&mut self) {
		self.teardown();
	}
}

/// Component-side handle: shares the scene with event handlers and owns the
/// live attachment until the component is cleaned up.
pub struct SurfaceSlot<S: Scene, A = Surface<S>> {
	scene: Rc<RefCell<Option<S>>>,
	attached: Rc<RefCell<Option<A>>>,
	mounted: Rc<Cell<bool>>,
}

impl<S: Scene, A> Clone for SurfaceSlot<S, A> {
	fn clone(&self) -> Self {
		Self {
			scene: self.scene.clone(),
			attached: self.attached.clone(),
			mounted: self.mounted.clone(),
		}
	}
}

impl<S: Scene, A: Attachment> Default for SurfaceSlot<S, A> {
	fn default() -> Self {
		Self::new()
	}
}

impl<S: Scene, A: Attachment> SurfaceSlot<S, A> {
	/// An empty slot for a component that is about to mount.
	pub fn new() -> Self {
		Self {
			scene: Rc::new(RefCell::new(None)),
			attached: Rc::new(RefCell::new(None)),
			mounted: Rc::new(Cell::new(true)),
		}
	}

	/// Run `attach` against the shared scene cell unless something is already
	/// attached or the component is gone. Returns whether a new attachment is
	/// now live. A failed attach is logged and leaves no scene behind.
	pub fn attach<E: fmt::Display>(
		&self,
		label: &str,
		attach: impl FnOnce(Rc<RefCell<Option<S>>>) -> Result<A, E>,
	) -> bool {
		if !self.mounted.get() || self.attached.borrow().is_some() {
			return false;
		}
		match attach(self.scene.clone()) {
			Ok(attachment) if self.mounted.get() => {
				*self.attached.borrow_mut() = Some(attachment);
				debug!("{label}: animation started");
				true
			}
			Ok(mut attachment) => {
				attachment.detach();
				self.scene.borrow_mut().take();
				false
			}
			Err(e) => {
				self.scene.borrow_mut().take();
				error!("{label}: failed to initialise canvas: {e}");
				false
			}
		}
	}

	/// Detach and drop the scene; later `attach`/`mount` calls are ignored.
	/// Repeated calls do nothing.
	pub fn unmount(&self) {
		self.mounted.set(false);
		let attachment = self.attached.borrow_mut().take();
		if let Some(mut attachment) = attachment {
			attachment.detach();
		}
		self.scene.borrow_mut().take();
	}

	/// Run `f` against the live scene, if any.
	pub fn with_scene<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
		self.scene.borrow_mut().as_mut().map(f)
	}
}

impl<S: Scene> SurfaceSlot<S> {
	/// Attach a [`Surface`] on `canvas`. Failure is logged and leaves the
	/// canvas blank.
	pub fn mount(&self, label: &str, canvas: HtmlCanvasElement, build: impl FnOnce(f64, f64) -> S) {
		self.attach(label, |scene| Surface::mount(canvas, scene, build));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Counter(u32);

	impl Scene for Counter {
		fn tick(&mut self) {
			self.0 += 1;
		}

		fn render(&self, _ctx: &CanvasRenderingContext2d) {}

		fn resize(&mut self, _width: f64, _height: f64) {}
	}

	/// Counts how often it was detached.
	struct Recorder(Rc<Cell<u32>>);

	impl Attachment for Recorder {
		fn detach(&mut self) {
			self.0.set(self.0.get() + 1);
		}
	}

	type Slot = SurfaceSlot<Counter, Recorder>;

	fn attach_ok(slot: &Slot, detached: &Rc<Cell<u32>>) -> bool {
		let detached = detached.clone();
		slot.attach("test", move |scene| {
			*scene.borrow_mut() = Some(Counter(0));
			Ok::<_, SurfaceError>(Recorder(detached))
		})
	}

	#[test]
	fn attach_builds_scene_once() {
		let slot = Slot::new();
		let detached = Rc::new(Cell::new(0));
		assert!(attach_ok(&slot, &detached));
		assert_eq!(slot.with_scene(|s| s.0), Some(0));

		let called = Cell::new(false);
		let again = slot.attach("test", |_| {
			called.set(true);
			Ok::<_, SurfaceError>(Recorder(detached.clone()))
		});
		assert!(!again);
		assert!(!called.get());
	}

	#[test]
	fn mount_after_unmount_is_refused() {
		let slot = Slot::new();
		slot.unmount();
		let called = Cell::new(false);
		let attached = slot.attach("test", |scene| {
			called.set(true);
			*scene.borrow_mut() = Some(Counter(0));
			Ok::<_, SurfaceError>(Recorder(Rc::new(Cell::new(0))))
		});
		assert!(!attached);
		assert!(!called.get());
		assert_eq!(slot.with_scene(|s| s.0), None);
	}

	#[test]
	fn repeated_unmount_detaches_once() {
		let slot = Slot::new();
		let detached = Rc::new(Cell::new(0));
		attach_ok(&slot, &detached);
		slot.unmount();
		slot.unmount();
		assert_eq!(detached.get(), 1);
		assert_eq!(slot.with_scene(|s| s.0), None);
	}

	#[test]
	fn failed_attach_leaves_no_scene() {
		let slot = Slot::new();
		let attached = slot.attach("test", |scene| {
			*scene.borrow_mut() = Some(Counter(3));
			Err::<Recorder, _>(SurfaceError::Context("canvas returned no context".into()))
		});
		assert!(!attached);
		assert_eq!(slot.with_scene(|s| s.0), None);

		let detached = Rc::new(Cell::new(0));
		assert!(attach_ok(&slot, &detached));
		assert_eq!(slot.with_scene(|s| s.0), Some(0));
	}

	#[test]
	fn attach_finishing_after_unmount_is_detached() {
		let slot = Slot::new();
		let detached = Rc::new(Cell::new(0));
		let inner = slot.clone();
		let recorder = detached.clone();
		let attached = slot.attach("test", move |scene| {
			*scene.borrow_mut() = Some(Counter(0));
			inner.unmount();
			Ok::<_, SurfaceError>(Recorder(recorder))
		});
		assert!(!attached);
		assert_eq!(detached.get(), 1);
		assert_eq!(slot.with_scene(|s| s.0), None);
	}

	#[test]
	fn clones_share_the_scene() {
		let slot = Slot::new();
		let handler = slot.clone();
		attach_ok(&slot, &Rc::new(Cell::new(0)));
		handler.with_scene(|s| s.tick());
		assert_eq!(slot.with_scene(|s| s.0), Some(1));
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
	use wasm_bindgen_test::*;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	struct Blank;

	impl Scene for Blank {
		fn tick(&mut self) {}

		fn render(&self, _ctx: &CanvasRenderingContext2d) {}

		fn resize(&mut self, _width: f64, _height: f64) {}
	}

	fn canvas() -> HtmlCanvasElement {
		web_sys::window()
			.and_then(|w| w.document())
			.expect("document")
			.create_element("canvas")
			.expect("canvas element")
			.dyn_into::<HtmlCanvasElement>()
			.expect("HtmlCanvasElement")
	}

	#[wasm_bindgen_test]
	fn teardown_twice_drops_scene_and_backing_store() {
		let scene = Rc::new(RefCell::new(None));
		let canvas = canvas();
		let mut surface = Surface::mount(canvas.clone(), scene.clone(), |_, _| Blank).expect("mount");
		assert!(scene.borrow().is_some());
		assert!(canvas.width() > 0);

		surface.teardown();
		surface.teardown();
		assert!(scene.borrow().is_none());
		assert_eq!((canvas.width(), canvas.height()), (0, 0));
	}

	#[wasm_bindgen_test]
	fn mount_without_2d_context_leaves_scene_empty() {
		let canvas = canvas();
		// a canvas hands out one context kind; after this "2d" yields null
		let _ = canvas.get_context("bitmaprenderer");
		let scene = Rc::new(RefCell::new(None));
		let result = Surface::mount(canvas, scene.clone(), |_, _| Blank);
		assert!(matches!(result, Err(SurfaceError::Context(_))));
		assert!(scene.borrow().is_none());
	}

	#[wasm_bindgen_test]
	fn slot_mount_after_unmount_leaves_no_scene() {
		let slot: SurfaceSlot<Blank> = SurfaceSlot::new();
		slot.unmount();
		slot.mount("test", canvas(), |_, _| Blank);
		assert!(slot.with_scene(|_| ()).is_none());
	}
}

use std::cell::Cell;
use std::error::Error;
use std::rc::Rc;

use gdk::{self, EventMask, EventType, WindowExt};
use cairo;

use pathr::{parse, MeasureSpec, PathRevealView, ProgressAnimation, StrokeStyle};

const HEART: &str = "M 300,110 C 300,200 200,250 150,300 C 110,240 10,190 10,110 \
		     C 10,30 130,10 150,100 C 150,10 300,30 300,110 z";

fn make_event_mask() -> EventMask {
    EventMask::empty()
	| EventMask::BUTTON_PRESS_MASK
	| EventMask::KEY_PRESS_MASK
	| EventMask::STRUCTURE_MASK
}

fn make_win_attrs(screen: &gdk::Screen, width: i32, height: i32) -> gdk::WindowAttr {
    let display = screen.get_display();
    let seat = display.get_default_seat().expect("Error: could not get default seat");

    let point = seat.get_pointer().expect("Error: could not get pointer").get_position();
    let monitor = display.get_monitor_at_point(point.1, point.2).expect("Error: could not get monitor at point");

    let geo = monitor.get_geometry();

    gdk::WindowAttr {
	title: Some(String::from("Path Reveal")),
	x: Some((geo.width - width) / 2),
	y: Some((geo.height - height) / 2),
	width,
	height,
	event_mask: make_event_mask(),
	window_type: gdk::WindowType::Toplevel,
	..gdk::WindowAttr::default()
    }
}

fn draw(window: &gdk::Window, view: &PathRevealView) -> Option<()> {
    let vis_reg = window.get_visible_region()?;
    let context = window.begin_draw_frame(&vis_reg)?;
    let mut cr: cairo::Context = context.get_cairo_context()?;

    cr.set_source_rgb(1.0, 1.0, 1.0);
    cr.paint();

    if let Err(err) = view.draw(&mut cr) {
	log::error!("draw failed: {}", err);
    }

    window.end_draw_frame(&context);
    Some(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    gdk::init();

    let mut args = std::env::args().skip(1);
    let data = args.next().unwrap_or_else(|| String::from(HEART));
    let style: StrokeStyle = match args.next() {
	Some(decls) => decls.parse()?,
	None => StrokeStyle::default(),
    };

    let width = 700;
    let height = 700;

    let mut view = PathRevealView::with_style(style);
    view.on_measure(MeasureSpec::exactly(width as u32), MeasureSpec::exactly(height as u32))?;
    view.set_path(parse(&data)?)?;
    view.scale_path_by(2.0, 2.0)?;
    view.set_padding(20.0, 20.0);

    let dirty = Rc::new(Cell::new(true));
    let flag = dirty.clone();
    view.on_invalidate(move || flag.set(true));

    let display = gdk::Display::get_default().expect("Error getting default display");
    let screen = display.get_default_screen();
    let root_win = screen.get_root_window().expect("Error getting root window");

    log::info!("display name: {}", display.get_name());

    let attrs = make_win_attrs(&screen, width, height);
    let window = gdk::Window::new(Some(&root_win), &attrs);
    window.show();

    let mut anim = ProgressAnimation::default();
    anim.play();

    let refresh_rate = 60; // 60 Hz

    'main: loop {
	std::thread::sleep(std::time::Duration::new(0, 1000_000_000 / refresh_rate));

	if anim.is_playing() || (anim.is_finished() && view.progress() < 1.0) {
	    anim.apply(&mut view, "percentage")?;
	}

	if dirty.replace(false) {
	    draw(&window, &view);
	}

	while display.has_pending() {
	    if let Some(ev) = display.get_event() {
		match ev.get_event_type() {
		    EventType::Delete => break 'main,
		    EventType::ButtonPress => {
			log::debug!("restarting reveal");
			anim.play();
		    },
		    EventType::KeyPress => {
			match ev.get_keyval().and_then(std::char::from_u32) {
			    Some('q') => break 'main,
			    Some(' ') => anim.play(),
			    _ => continue,
			}
		    },
		    EventType::Expose | EventType::Configure => dirty.set(true),
		    _ => continue,
		}
	    }
	}
    }

    Ok(())
}

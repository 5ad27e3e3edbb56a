use std::io::{self, Write};

use greeter::prelude::*;

use crate::report::{ErrorExt, Report};
use crate::{config, log, Format, RenderArgs};

pub fn render(args: &RenderArgs) -> Report<()> {
    let props = config::load(&args.props)?;

    let mut rt = Runtime::<App>::mount(props);

    log::mounted!("greeting for {}", rt.component().props().name);

    for _ in 0..args.clicks {
        rt.dispatch(&Event::click(COUNT_BUTTON))
            .message("failed to click the counter button")?;
    }

    if args.clicks > 0 {
        log::clicked!("{} times", args.clicks);
    }

    log::info!("rendered {} times", rt.renders());

    let mut stdout = io::stdout().lock();

    write_view(&mut stdout, rt.view(), args.format).message("failed to write to stdout")
}

/// Write the mounted tree in the chosen format, always ending with a newline.
pub fn write_view<W, M>(out: &mut W, view: &Node<M>, format: Format) -> io::Result<()>
where
    W: Write,
{
    match format {
        Format::Html => writeln!(out, "{view}"),
        Format::Text => out.write_all(view.to_text().as_bytes()),
    }?;

    out.flush()
}

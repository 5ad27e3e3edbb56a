use std::io::{self, BufRead, Write};

use greeter::prelude::*;

use crate::render::write_view;
use crate::report::{Error, ErrorExt, Report};
use crate::{config, log, Format, RunArgs};

pub fn run(args: &RunArgs) -> Report<()> {
    let props = config::load(&args.props)?;

    let mut rt = Runtime::<App>::mount(props);

    log::mounted!("greeting for {}", rt.component().props().name);
    log::info!("press Enter to click the counter button, `q` to quit");

    rt.on_render(|_, render| {
        log::rendered!("render #{} with {} changes", render.count, render.changes);
    });

    let clicks = session(&mut rt, io::stdin().lock(), &mut io::stdout(), args.format)?;

    log::info!("clicked {clicks} times, counter is at {}", rt.component().counter());

    Ok(())
}

/// Drive a mounted app from `input` one line at a time, writing the view to
/// `out` on mount and after every render. Returns the number of clicks.
fn session<R, W>(rt: &mut Runtime<App>, input: R, out: &mut W, format: Format) -> Report<u64>
where
    R: BufRead,
    W: Write,
{
    let mut clicks = 0;

    write_view(out, rt.view(), format).message("failed to write view")?;

    for line in input.lines() {
        let line = line.message("failed to read input")?;

        match line.trim() {
            "" | "c" | "click" => {
                let then = rt
                    .dispatch(&Event::click(COUNT_BUTTON))
                    .message("failed to click the counter button")?;

                clicks += 1;
                log::clicked!("counter is at {}", rt.component().counter());

                if then == Then::Render {
                    write_view(out, rt.view(), format).message("failed to write view")?;
                }
            }
            "q" | "quit" => break,
            cmd => {
                return Err(Error::message(format!(
                    "unknown command `{cmd}`; press Enter to click or `q` to quit"
                )))
            }
        }
    }

    Ok(clicks)
}

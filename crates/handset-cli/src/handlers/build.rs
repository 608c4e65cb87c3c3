//! Phone construction handlers: interactive menu, preset and custom

use crate::cli::{CustomArgs, PresetArgs};
use crate::config::ShellConfig;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use crate::shell::{present, Session};
use handset_core::{Director, MobilePhone, MobilePhoneBuilder, PhoneBuilder};
use std::io::BufRead;
use tracing::{info, instrument};

/// Handle the interactive menu
#[instrument(skip_all)]
pub fn handle_menu<R: BufRead>(
    input: R,
    shell: &ShellConfig,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::new("menu_session");
    info!(attempts = shell.attempts(), "Starting interactive session");

    let mut builder = MobilePhoneBuilder::new();
    Session::new(input, output, shell.attempts()).run(&mut builder)?;
    Ok(())
}

/// Handle the preset command
#[instrument(skip(output), fields(model = %args.model))]
pub fn handle_preset(args: PresetArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("preset_build");

    let mut builder = MobilePhoneBuilder::new();
    let phone = Director::new(&mut builder).construct_phone(args.model);
    present(output, &phone)?;
    Ok(())
}

/// Handle the custom command
#[instrument(skip_all)]
pub fn handle_custom(args: CustomArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("custom_build");

    let mut builder = MobilePhoneBuilder::new();
    let phone = build_custom(&mut builder, args);
    present(output, &phone)?;
    Ok(())
}

/// Apply only the fields given on the command line
fn build_custom(builder: &mut MobilePhoneBuilder, args: CustomArgs) -> MobilePhone {
    if let Some(model) = args.model {
        builder.set_model(model);
    }
    if let Some(processor) = args.processor {
        builder.set_processor(processor);
    }
    if let Some(ram) = args.ram {
        builder.set_ram(ram);
    }
    if let Some(storage) = args.storage {
        builder.set_storage(storage);
    }
    if let Some(camera) = args.camera {
        builder.set_camera(camera);
    }
    builder.build()
}

use cardcraft::app::{self, Flags};

fn main() -> iced::Result {
    pretty_env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
    };

    app::run(flags)
}

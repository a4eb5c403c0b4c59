//! Indonesia info slash commands: /sekolah, /imsakiyah
//!
//! Both open a browsable menu when called without options.

use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::CommandOptionType;

pub fn create_commands() -> Vec<CreateApplicationCommand> {
    vec![create_sekolah_command(), create_imsakiyah_command()]
}

fn create_sekolah_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("sekolah")
        .description("Jelajahi sekolah di Indonesia")
        .create_option(|option| {
            option
                .name("nama")
                .description("Cari sekolah berdasarkan nama")
                .kind(CommandOptionType::String)
                .required(false)
                .min_length(3)
                .max_length(100)
        })
        .create_option(|option| {
            option
                .name("npsn")
                .description("Detail sekolah berdasarkan NPSN")
                .kind(CommandOptionType::String)
                .required(false)
                .min_length(8)
                .max_length(8)
        })
        .to_owned()
}

fn create_imsakiyah_command() -> CreateApplicationCommand {
    CreateApplicationCommand::default()
        .name("imsakiyah")
        .description("Jadwal imsakiyah Ramadhan per kota")
        .create_option(|option| {
            option
                .name("kota")
                .description("Jadwal hari ini untuk kota ini")
                .kind(CommandOptionType::String)
                .required(false)
                .max_length(100)
        })
        .create_option(|option| {
            option
                .name("cari")
                .description("Cari kota dengan kata kunci")
                .kind(CommandOptionType::String)
                .required(false)
                .max_length(100)
        })
        .to_owned()
}

pub mod generate_subtitles_use_case;

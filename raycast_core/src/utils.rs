use colour::red;

pub fn print_intro() {
    println!(
        r#"
   _____  ____ _   __  __  _____  ____ _   _____  / /_
  / ___/ / __ `/  / / / / / ___/ / __ `/  / ___/ / __/
 / /    / /_/ /  / /_/ / / /__  / /_/ /  (__  ) / /_
/_/     \__,_/   \__, /  \___/  \__,_/  /____/  \__/
                /____/"#
    );

    if cfg!(debug_assertions) {
        red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Keep in mind that everything is way slower than it should be.\n\n");
    }
}

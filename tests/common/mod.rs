use assert_cmd::Command;

/// Command for one of the crate's binaries with logging kept out of the way.
pub fn bin(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.env_remove("LOG_FILE").env("LOG_LEVEL", "off");
    cmd
}

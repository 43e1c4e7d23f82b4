use assert_cmd::Command;

pub fn storypage_cmd() -> Command {
    let mut cmd = Command::cargo_bin("storypage").unwrap();
    cmd.env_remove("STORYPAGE_ROOT");
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

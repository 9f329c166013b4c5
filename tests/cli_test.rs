//! Integration tests for the launcher binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn ghostie() -> Command {
    let mut cmd = Command::new(cargo_bin("ghostie"));
    cmd.env("NO_COLOR", "1").env_remove("GHOSTIE_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = ghostie();
    cmd.env("GHOSTIE_SCRIPT", temp.path().join("absent"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--memorize"))
        .stdout(predicate::str::ends_with("/issues\n"));
    Ok(())
}

#[test]
fn cli_short_help_anywhere_skips_everything() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = ghostie();
    cmd.env("GHOSTIE_SCRIPT", temp.path().join("absent"))
        .env("GHOSTIE_PYTHON", temp.path().join("no-python"));
    cmd.args(["--tools", "-h", "--haunt"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_missing_script_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let script = temp.path().join("absent");
    let mut cmd = ghostie();
    cmd.env("GHOSTIE_SCRIPT", &script)
        .env("GHOSTIE_PYTHON", temp.path().join("no-python"));
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("script not found"))
        .stderr(predicate::str::contains(script.display().to_string()))
        .stderr(predicate::str::contains("reinstalling"));
    Ok(())
}

#[test]
fn cli_missing_runtime_prints_install_hints() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let script = temp.path().join("ghostie");
    fs::write(&script, "print('boo')\n")?;
    let mut cmd = ghostie();
    cmd.env("GHOSTIE_SCRIPT", &script)
        .env("GHOSTIE_PYTHON", temp.path().join("no-python"));
    cmd.arg("--remember");
    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("required but not found"))
        .stderr(predicate::str::contains("pkg install python"))
        .stderr(predicate::str::contains("apt install python3"))
        .stderr(predicate::str::contains("brew install python3"));
    Ok(())
}

#[cfg(unix)]
mod unix {
    use super::*;

    fn write_executable(path: &Path, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        fs::write(path, body).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// A package layout with a fake `python3` that logs each call and runs
    /// the script with `/bin/sh`.
    struct Install {
        temp: TempDir,
        runtime: PathBuf,
        script: PathBuf,
        calls: PathBuf,
    }

    impl Install {
        fn new(script_body: &str) -> Self {
            let temp = TempDir::new().unwrap();
            let runtime = temp.path().join("python3");
            let script = temp.path().join("ghostie");
            let calls = temp.path().join("calls.log");

            write_executable(
                &runtime,
                &format!(
                    "#!/bin/sh\n\
                     printf '%s\\n' \"$1\" >> '{}'\n\
                     if [ \"$1\" = \"--version\" ]; then\n\
                     echo 'Python 3.12.0'\n\
                     exit 0\n\
                     fi\n\
                     exec /bin/sh \"$@\"\n",
                    calls.display()
                ),
            );
            fs::write(&script, script_body).unwrap();

            Self {
                temp,
                runtime,
                script,
                calls,
            }
        }

        fn command(&self) -> Command {
            let mut cmd = ghostie();
            cmd.env("GHOSTIE_PYTHON", &self.runtime)
                .env("GHOSTIE_SCRIPT", &self.script)
                .current_dir(self.temp.path());
            cmd
        }

        fn calls(&self) -> Vec<String> {
            fs::read_to_string(&self.calls)
                .unwrap_or_default()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    #[test]
    fn cli_forwards_args_verbatim() -> Result<(), Box<dyn std::error::Error>> {
        let install = Install::new("for a in \"$@\"; do printf '[%s]\\n' \"$a\"; done\n");
        let mut cmd = install.command();
        cmd.args(["--memorize", "--", "two words", "-x", "", "--version"]);
        cmd.assert()
            .success()
            .stdout("[--memorize]\n[--]\n[two words]\n[-x]\n[]\n[--version]\n");
        Ok(())
    }

    #[test]
    fn cli_probes_before_running_script() -> Result<(), Box<dyn std::error::Error>> {
        let install = Install::new("exit 0\n");
        install.command().assert().success();
        assert_eq!(
            install.calls(),
            vec![
                "--version".to_string(),
                install.script.display().to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn cli_relays_exit_codes() -> Result<(), Box<dyn std::error::Error>> {
        for code in [0, 1, 42, 255] {
            let install = Install::new(&format!("exit {}\n", code));
            install.command().assert().code(code);
        }
        Ok(())
    }

    #[test]
    fn cli_missing_script_never_probes() -> Result<(), Box<dyn std::error::Error>> {
        let install = Install::new("exit 0\n");
        fs::remove_file(&install.script)?;
        install.command().assert().code(1);
        assert!(install.calls().is_empty());
        Ok(())
    }

    #[test]
    fn cli_failed_probe_never_runs_script() -> Result<(), Box<dyn std::error::Error>> {
        let install = Install::new("touch script-ran\n");
        let broken = install.temp.path().join("broken-python");
        let probed = install.temp.path().join("probed");
        write_executable(
            &broken,
            &format!("#!/bin/sh\ntouch '{}'\nexit 1\n", probed.display()),
        );

        let mut cmd = install.command();
        cmd.env("GHOSTIE_PYTHON", &broken).arg("--tools");
        cmd.assert()
            .code(1)
            .stderr(predicate::str::contains("required but not found"));
        assert!(probed.exists());
        assert!(!install.temp.path().join("script-ran").exists());
        Ok(())
    }

    #[test]
    fn cli_inherits_stdin_and_stdout() -> Result<(), Box<dyn std::error::Error>> {
        let install = Install::new("read line\necho \"got:$line\"\n");
        let mut cmd = install.command();
        cmd.write_stdin("hello\n");
        cmd.assert().success().stdout("got:hello\n");
        Ok(())
    }

    #[test]
    fn cli_child_stderr_passes_through() -> Result<(), Box<dyn std::error::Error>> {
        let install = Install::new("echo oops >&2\nexit 3\n");
        install
            .command()
            .assert()
            .code(3)
            .stderr(predicate::str::contains("oops"));
        Ok(())
    }

    #[test]
    fn cli_marks_script_executable() -> Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::PermissionsExt;

        let install = Install::new("exit 0\n");
        fs::set_permissions(&install.script, fs::Permissions::from_mode(0o644))?;
        install.command().assert().success();
        let mode = fs::metadata(&install.script)?.permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        Ok(())
    }

    #[test]
    fn cli_debug_logging_goes_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
        let install = Install::new("echo payload\n");
        let mut cmd = install.command();
        cmd.env("GHOSTIE_LOG", "ghostie=debug");
        cmd.assert()
            .success()
            .stdout("payload\n")
            .stderr(predicate::str::contains("runtime probe"));
        Ok(())
    }

    #[test]
    fn cli_symlinked_launcher_finds_package_script() -> Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::{symlink, PermissionsExt};

        // pkg/bin/ghostie is the real launcher, pkg/ghostie its script, and
        // shared/ghostie a package-manager style link to the launcher.
        let install = Install::new("exit 0\n");
        let pkg = install.temp.path().join("pkg");
        let shared = install.temp.path().join("shared");
        fs::create_dir_all(pkg.join("bin"))?;
        fs::create_dir_all(&shared)?;

        let launcher = pkg.join("bin").join("ghostie");
        fs::copy(cargo_bin("ghostie"), &launcher)?;
        fs::set_permissions(&launcher, fs::Permissions::from_mode(0o755))?;
        fs::write(pkg.join("ghostie"), "echo \"from-pkg $1\"\n")?;
        let link = shared.join("ghostie");
        symlink(&launcher, &link)?;

        let mut cmd = Command::new(&link);
        cmd.env("NO_COLOR", "1")
            .env_remove("GHOSTIE_LOG")
            .env_remove("GHOSTIE_SCRIPT")
            .env("GHOSTIE_PYTHON", &install.runtime)
            .arg("x");
        cmd.assert().success().stdout("from-pkg x\n");
        Ok(())
    }
}

use super::*;

#[test]
fn build_program_keeps_arguments_separate() {
    let argv = vec!["echo".to_string(), "a b; rm -rf /".to_string()];
    let cmd = build_program_command(&argv).unwrap();
    assert_eq!(cmd.get_program(), "echo");
    let args: Vec<_> = cmd.get_args().collect();
    assert_eq!(args, vec!["a b; rm -rf /"]);
}

#[test]
fn build_program_rejects_empty_vector() {
    assert!(build_program_command(&[]).is_err());
}

#[test]
fn build_shell_wraps_script() {
    let cmd = build_shell_command("echo ok | sort");
    #[cfg(unix)]
    {
        assert_eq!(cmd.get_program(), "sh");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["-c", "echo ok | sort"]);
    }
    #[cfg(not(unix))]
    let _ = cmd;
}

#[test]
fn display_joins_with_spaces() {
    let argv = vec!["pacman".to_string(), "-Qi".to_string(), "vim".to_string()];
    assert_eq!(display_command(&argv), "pacman -Qi vim");
}

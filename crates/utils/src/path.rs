/// Where the guest-side socket lives unless `--socket` says otherwise.
pub const DEFAULT_SOCKET_PATH: &str = "/run/guest/volumes-service.sock";

/// Directory that stored values files are written into.
pub const DEFAULT_VALUES_DIR: &str = "/tmp";

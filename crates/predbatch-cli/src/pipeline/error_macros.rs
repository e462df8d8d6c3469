// src/pipeline/error_macros.rs

#[macro_export]
macro_rules! try_mkdir {
    ($path:expr) => {
        std::fs::create_dir_all($path).map_err(|e| RunError::CreateDirError {
            path: $path.to_path_buf(),
            source: e,
            backtrace: Backtrace::capture(),
        })
    };
}

#[macro_export]
macro_rules! try_discover {
    ($dir:expr) => {
        predbatch_core::discover::discover_inputs($dir).map_err(|e| RunError::DiscoverError {
            path: $dir.to_path_buf(),
            source: e,
            backtrace: Backtrace::capture(),
        })
    };
}

#[macro_export]
macro_rules! try_persist {
    ($dir:expr, $index:expr, $tokens:expr) => {{
        let dir = $dir;
        let index = $index;
        predbatch_core::output::write_results(dir, index, $tokens).map_err(|e| {
            RunError::PersistError {
                path: predbatch_core::output::output_path(dir, index),
                source: e,
                backtrace: Backtrace::capture(),
            }
        })
    }};
}

pub mod compile_time {
    pub mod catalog {
        /// Maximum token document size accepted by the loader (4MB)
        /// SECURITY: Prevents memory exhaustion from oversized inputs
        pub const MAX_DOCUMENT_SIZE: u64 = 4 * 1024 * 1024;

        /// Maximum number of tokens in a single document
        /// SECURITY: Bounds the work done by resolution and rendering
        pub const MAX_TOKENS_PER_CATALOG: usize = 50_000;

        /// Maximum number of declared categories in a single document
        pub const MAX_CATEGORIES_PER_CATALOG: usize = 256;
    }

    pub mod references {
        /// Maximum placeholders scanned in a single derived field
        /// SECURITY: Prevents pathological substitution workloads
        pub const MAX_PLACEHOLDERS_PER_FIELD: usize = 64;

        /// Maximum placeholder length, braces included
        pub const MAX_PLACEHOLDER_LENGTH: usize = 256;
    }

    pub mod logging {
        /// In-memory log buffer size
        /// RESOURCE: Controls memory usage of the memory logger
        pub const LOG_BUFFER_SIZE: usize = 1000;

        /// Maximum length of a single log message
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4096;
    }
}

//! Naming conventions of the SynqClient source tree.

/// C++ namespace and public include directory name
pub const NAMESPACE: &str = "SynqClient";

/// Export macro placed on every public class
pub const EXPORT_MACRO: &str = "LIBSYNQCLIENT_EXPORT";

/// Header defining the export macro, relative to the include directory
pub const GLOBAL_HEADER: &str = "libsynqclient_global.h";

/// Parent of every class generated without a base class
pub const ROOT_BASE: &str = "QObject";

/// Prefix of include guard macros
pub const GUARD_PREFIX: &str = "SYNQCLIENT";

/// Library directory below the repository root
pub const LIBRARY_DIR: &str = "libsynqclient";

/// Directory holding the test projects below the repository root
pub const TESTS_DIR: &str = "tests";

/// CMake function registering a test project
pub const TEST_REGISTRATION_MACRO: &str = "synqclient_add_test";

/// Copyright holder named in the license preamble
pub const COPYRIGHT_HOLDER: &str = "Martin Hoeher <martin@rpdev.net>";

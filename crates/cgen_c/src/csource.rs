use cgen_config::CgenConfig;
use cgen_core::Source;
use cgen_log::log_dbg;

use crate::cpp::Includes;

/// A C translation unit. Configured headers come first as one element.
pub fn c_source(config: CgenConfig) -> Source {
  let includes = Includes::from_headers(&config.headers);
  let mut source = Source::new(config);

  if !includes.0.is_empty() {
    log_dbg!(source.config(), "including {} headers", includes.0.len());
    source.add_element(includes);
  }

  source
}

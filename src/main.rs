// SPDX-License-Identifier: MIT

use stretchtrim::errors::StretchTrimError;

fn main() -> Result<(), StretchTrimError> {
    stretchtrim::run()
}

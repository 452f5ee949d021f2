/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use isrt_assert_close::{CheckClose, CheckCloseError, Tolerances};

use crate::{V3, M33};

impl CheckClose for V3 {
    fn check_close(&self, other: &V3, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.0.check_close(&other.0, tol) }
}

impl CheckClose for M33 {
    fn check_close(&self, other: &M33, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        for (a, b) in self.iter().zip(other.iter()) {
            a.check_close(b, tol)?;
        }
        Ok(())
    }
}

/* ************************************************************************ **
** This file is part of isrt, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

pub mod ext_traits {
    pub trait ArgMatchesExt<'a> {
        /// For when the value ought to exist because it was `required(true)`
        /// (and therefore clap would have exited if it were missing).
        fn expect_value_of(&self, s: &str) -> String;

        fn values_or_empty(&self, s: &str) -> Vec<String>;
    }

    impl<'a> ArgMatchesExt<'a> for clap::ArgMatches<'a> {
        fn expect_value_of(&self, s: &str) -> String
        { self.value_of(s).unwrap_or_else(|| panic!("BUG! ({} was required)", s)).into() }

        fn values_or_empty(&self, s: &str) -> Vec<String>
        { self.values_of(s).map(|vs| vs.map(Into::into).collect()).unwrap_or_default() }
    }
}

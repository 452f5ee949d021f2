pub(crate) mod periodic;

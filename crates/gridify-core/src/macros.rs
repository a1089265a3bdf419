macro_rules! err {
    ( $($arg:tt)* ) => {
        $crate::Error::from_args(format_args!( $($arg)* ))
    };
}

// bool, char, (), u8 - u128, i8 - i128, usize, isize, f32, f64
mod native_basic;

// &'static T, &'static dyn Reflect
mod native_ref;

// &'static str
mod native_str;

// (T1,)  (T1, T2)  ...  (T1, T2, .. T8)
mod native_tuple;

// [T; N]
mod native_array;

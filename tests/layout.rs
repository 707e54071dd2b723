mod tests {
    use myrtio_ws281x::Layout;
    use myrtio_ws281x::layout::{matrix_index, serpentine_index};

    #[test]
    fn test_matrix_index() {
        assert_eq!(matrix_index(4, 4, 8), Some(36));
        assert_eq!(matrix_index(0, 0, 8), Some(0));
        assert_eq!(matrix_index(7, 7, 8), Some(63));
        assert_eq!(matrix_index(8, 0, 8), None);
        assert_eq!(matrix_index(0, 0, 0), None);
    }

    #[test]
    fn test_serpentine_index() {
        // Even rows run forward
        assert_eq!(serpentine_index(5, 2, 8), Some(21));
        assert_eq!(serpentine_index(0, 0, 4), Some(0));
        // Odd rows run backwards
        assert_eq!(serpentine_index(5, 3, 8), Some(26));
        assert_eq!(serpentine_index(0, 1, 4), Some(7));
        assert_eq!(serpentine_index(3, 1, 4), Some(4));
        assert_eq!(serpentine_index(4, 1, 4), None);
    }

    #[test]
    fn test_index_overflow() {
        assert_eq!(matrix_index(1, usize::MAX, 2), None);
        assert_eq!(serpentine_index(0, usize::MAX, 2), None);
    }

    #[test]
    fn test_layout_index() {
        assert_eq!(Layout::RowMajor.index(1, 1, 4), Some(5));
        assert_eq!(Layout::Serpentine.index(1, 1, 4), Some(6));
    }
}

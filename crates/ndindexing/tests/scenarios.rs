use ndindexing::{ErrorKind, Indexing, IndexingError, StorageOrder};

#[test]
fn test_indexing_column_major() {
    let ind: Indexing = Indexing::new(
        &[0, 0], // base
        &[5, 4], // extent
        &[1, 0], // dimension 0 varies fastest
    )
    .unwrap();

    let tuple = [3, 2];
    let ix = ind.tuple_to_index(&tuple).unwrap();
    let tuple2 = ind.index_to_array::<2>(ix).unwrap();

    assert_eq!(ind.size(), 20);
    assert_eq!(ix, 13);
    assert_eq!(tuple, tuple2);
}

#[test]
fn test_indexing_row_major() {
    let ind: Indexing = Indexing::new(
        &[0, 0], // base
        &[4, 5], // extent
        &[0, 1], // dimension 1 varies fastest
    )
    .unwrap();

    let tuple = [3, 2];
    let ix = ind.tuple_to_index(&tuple).unwrap();
    let tuple2 = ind.index_to_array::<2>(ix).unwrap();

    assert_eq!(ind.size(), 20);
    assert_eq!(ix, 17);
    assert_eq!(tuple, tuple2);
}

#[test]
fn test_named_constructors_match_explicit_orders() {
    let rm: Indexing = Indexing::row_major(&[0, 0], &[4, 5]).unwrap();
    assert_eq!(rm, Indexing::new(&[0, 0], &[4, 5], &[0, 1]).unwrap());

    let cm: Indexing = Indexing::column_major(&[0, 0], &[5, 4]).unwrap();
    assert_eq!(cm, Indexing::new(&[0, 0], &[5, 4], &[1, 0]).unwrap());
    assert_eq!(cm.storage_order(), Some(StorageOrder::ColumnMajor));
}

#[test]
fn test_three_dimensional_with_bases() {
    // Fortran-style 1-based array of shape (2, 3, 4).
    let ind = Indexing::<i32, i64>::builder(&[2, 3, 4])
        .with_base(&[1, 1, 1])
        .with_storage_order(StorageOrder::ColumnMajor)
        .build()
        .unwrap();

    assert_eq!(ind.strides(), &[1, 2, 6]);
    assert_eq!(ind.tuple_to_index(&[1, 1, 1]).unwrap(), 0);
    assert_eq!(ind.tuple_to_index(&[2, 1, 1]).unwrap(), 1);
    assert_eq!(ind.tuple_to_index(&[1, 2, 1]).unwrap(), 2);
    assert_eq!(ind.tuple_to_index(&[2, 3, 4]).unwrap(), 23);
    assert_eq!(ind.index_to_tuple(23).unwrap(), vec![2, 3, 4]);

    let err = ind.tuple_to_index(&[0, 1, 1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_empty_extent_rejects_every_conversion() {
    let ind: Indexing = Indexing::row_major(&[0, 0], &[0, 3]).unwrap();
    assert_eq!(ind.size(), 0);
    assert!(matches!(
        ind.index_to_tuple(0),
        Err(IndexingError::IndexOutOfRange { index: 0, size: 0 })
    ));
    assert!(matches!(
        ind.tuple_to_index(&[0, 0]),
        Err(IndexingError::CoordinateOutOfRange { dim: 0, .. })
    ));
}

#[test]
fn test_index_to_tuple_into_buffer() {
    let ind: Indexing = Indexing::new(&[0, 0, 0], &[2, 3, 4], &[2, 0, 1]).unwrap();
    let mut buf = [0; 3];
    for index in 0..ind.size() {
        ind.index_to_tuple_into(index, &mut buf).unwrap();
        assert_eq!(ind.tuple_to_index(&buf).unwrap(), index);
    }

    let mut short = [0; 2];
    assert_eq!(
        ind.index_to_tuple_into(0, &mut short),
        Err(IndexingError::TupleLength {
            expected: 3,
            actual: 2
        })
    );
}

mod reshape;
